use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    quote: &'static str,
    company: &'static str,
}

static OWNERS: [Testimonial; 5] = [
    Testimonial {
        name: "Sarah Johnson",
        quote: "Availio transformed our gym operations completely. Member satisfaction increased by 40% in just 3 months.",
        company: "FitZone Elite",
    },
    Testimonial {
        name: "Michael Chen",
        quote: "The analytics dashboard gives us insights we never had before. Data-driven decisions have boosted our revenue.",
        company: "PowerFit Studios",
    },
    Testimonial {
        name: "Emma Rodriguez",
        quote: "Equipment utilization tracking helped us optimize our floor space and reduce wait times significantly.",
        company: "Urban Athletics",
    },
    Testimonial {
        name: "David Thompson",
        quote: "Our members love the seamless experience. Check-ins are faster and class bookings are effortless.",
        company: "Wellness World",
    },
    Testimonial {
        name: "Lisa Park",
        quote: "Staff productivity improved dramatically with automated workflows. We can focus on what matters most.",
        company: "Apex Fitness",
    },
];

static MEMBERS: [Testimonial; 5] = [
    Testimonial {
        name: "Alex Rivera",
        quote: "I never have to wait for equipment anymore! The app shows me exactly what's available in real-time.",
        company: "FitZone Elite Member",
    },
    Testimonial {
        name: "Jessica Wong",
        quote: "Booking classes is so easy now. I can plan my entire week's workouts in just a few taps.",
        company: "PowerFit Studios Member",
    },
    Testimonial {
        name: "Marcus Johnson",
        quote: "The app helped me discover new workouts and equipment I never knew existed at my gym.",
        company: "Urban Athletics Member",
    },
    Testimonial {
        name: "Sofia Martinez",
        quote: "I love getting notifications about my favorite machines being free. It's like having a personal assistant!",
        company: "Wellness World Member",
    },
    Testimonial {
        name: "Ryan Taylor",
        quote: "Tracking my workouts and progress has never been easier. The app keeps me motivated every day.",
        company: "Apex Fitness Member",
    },
];

/// One marquee row. Cards are rendered twice so the CSS loop has no gap.
fn marquee_row(items: &'static [Testimonial], class: &'static str) -> impl IntoView {
    view! {
        <div class="marquee">
            <div class=class>
                {items
                    .iter()
                    .chain(items.iter())
                    .map(|t| {
                        view! {
                            <div class="testimonial-card">
                                <blockquote class="testimonial-quote">{format!("\"{}\"", t.quote)}</blockquote>
                                <div class="testimonial-author">
                                    <h4 class="testimonial-name">{t.name}</h4>
                                    <p class="testimonial-company">{t.company}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="container testimonials-header">
                <span class="section-overline">"Customer Stories"</span>
                <h2 class="section-title">"Trusted by" <br /> "Gyms & Members"</h2>
                <p class="section-description">
                    "Discover how gym owners and members worldwide are transforming their fitness "
                    "experience with Availio's innovative solutions"
                </p>
            </div>
            {marquee_row(&OWNERS, "marquee-track marquee-left")}
            {marquee_row(&MEMBERS, "marquee-track marquee-right")}
        </section>
    }
}
