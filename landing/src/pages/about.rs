// About page - mission and founders
use super::PageHeader;
use leptos::prelude::*;

struct Founder {
    name: &'static str,
    bio: &'static str,
    linkedin: Option<&'static str>,
    github: &'static str,
    email: &'static str,
}

static FOUNDERS: [Founder; 3] = [
    Founder {
        name: "Efdal Erter",
        bio: "Former fitness tech executive with 10+ years of experience in digital transformation.",
        linkedin: Some("https://www.linkedin.com/in/efdal-erter-394211227/"),
        github: "https://github.com/MeEfe",
        email: "efdal.erter@students.fhv.at",
    },
    Founder {
        name: "Patrick Jenny",
        bio: "IoT specialist and software architect passionate about connecting physical and digital spaces.",
        linkedin: Some("https://www.linkedin.com/in/patrick-jenny-778299206/"),
        github: "https://github.com/Patinator01",
        email: "patrick.jenny@students.fhv.at",
    },
    Founder {
        name: "Sedef Keser",
        bio: "Product designer with a background in fitness and wellness, focused on user-centric solutions.",
        linkedin: None,
        github: "https://github.com/sedef-keser",
        email: "sedef.keser@students.fhv.at",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageHeader
            title="About Availio"
            description="We're building the future of fitness technology, connecting gyms and members through intelligent IoT solutions."
        />
        <section class="mission">
            <div class="container mission-card">
                <h2 class="section-title">"Our Mission"</h2>
                <p>
                    "Empowering gyms with data-driven insights and providing members with seamless experiences. "
                    "We believe in making fitness accessible, efficient, and enjoyable for everyone."
                </p>
            </div>
        </section>
        <section class="founders">
            <div class="container">
                <h2 class="section-title">"Meet the Founders"</h2>
                <div class="founder-grid">
                    {FOUNDERS
                        .iter()
                        .map(|founder| {
                            view! {
                                <div class="founder-card">
                                    <div class="founder-avatar">{initials(founder.name)}</div>
                                    <h3 class="founder-name">{founder.name}</h3>
                                    <p class="founder-bio">{founder.bio}</p>
                                    <div class="founder-links">
                                        {founder.linkedin.map(|href| view! {
                                            <a href=href target="_blank" rel="noopener noreferrer" aria-label=format!("{} on LinkedIn", founder.name)>"in"</a>
                                        })}
                                        <a href=founder.github target="_blank" rel="noopener noreferrer" aria-label=format!("{} on GitHub", founder.name)>"gh"</a>
                                        <a href=format!("mailto:{}", founder.email) aria-label=format!("Email {}", founder.name)>"@"</a>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn founder_initials() {
        assert_eq!(initials("Efdal Erter"), "EE");
        assert_eq!(initials("Sedef  Keser"), "SK");
        assert_eq!(initials(""), "");
    }
}
