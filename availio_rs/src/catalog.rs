//! Product feature and pricing catalog.

/// One product capability and the platforms it ships on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Icon identifier used by the landing page
    pub icon: &'static str,
    /// Title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Available in the gym dashboard
    pub dashboard: bool,
    /// Available in the member app
    pub mobile: bool,
}

/// Platform filter on the features page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeatureView {
    /// Gym dashboard only
    Dashboard,
    /// Member app only
    Mobile,
    /// Everything
    #[default]
    Both,
}

impl FeatureView {
    /// All filters in display order.
    pub const ALL: [FeatureView; 3] = [FeatureView::Both, FeatureView::Dashboard, FeatureView::Mobile];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureView::Dashboard => "Dashboard",
            FeatureView::Mobile => "Mobile App",
            FeatureView::Both => "All Features",
        }
    }

    /// Whether `feature` is shown under this filter.
    pub fn includes(&self, feature: &Feature) -> bool {
        match self {
            FeatureView::Dashboard => feature.dashboard,
            FeatureView::Mobile => feature.mobile,
            FeatureView::Both => true,
        }
    }
}

/// Full feature list.
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "bar-chart",
        title: "Real-time Analytics",
        description: "Track equipment usage, member activity, and revenue streams with live data visualization",
        dashboard: true,
        mobile: false,
    },
    Feature {
        icon: "users",
        title: "Member Management",
        description: "Complete member profiles, check-in history, and membership status tracking",
        dashboard: true,
        mobile: false,
    },
    Feature {
        icon: "clock",
        title: "Equipment Availability",
        description: "See which equipment is free in real-time and plan your workout accordingly",
        dashboard: false,
        mobile: true,
    },
    Feature {
        icon: "calendar",
        title: "Class Booking",
        description: "Book fitness classes, view schedules, and get notifications for upcoming sessions",
        dashboard: false,
        mobile: true,
    },
    Feature {
        icon: "shield",
        title: "Security & Access",
        description: "Manage gym access, security protocols, and member authentication systems",
        dashboard: true,
        mobile: false,
    },
    Feature {
        icon: "trophy",
        title: "Workout Tracking",
        description: "Log exercises, track progress, and achieve your fitness goals with detailed insights",
        dashboard: false,
        mobile: true,
    },
    Feature {
        icon: "zap",
        title: "Smart Notifications",
        description: "Get alerts about equipment availability, class reminders, and gym updates",
        dashboard: true,
        mobile: true,
    },
    Feature {
        icon: "heart",
        title: "Health Monitoring",
        description: "Track vital health metrics and integrate with popular fitness devices",
        dashboard: false,
        mobile: true,
    },
    Feature {
        icon: "bell",
        title: "Revenue Tracking",
        description: "Monitor income streams, membership sales, and financial performance metrics",
        dashboard: true,
        mobile: false,
    },
    Feature {
        icon: "map-pin",
        title: "Gym Locator",
        description: "Find nearby partner gyms and access your membership across multiple locations",
        dashboard: false,
        mobile: true,
    },
];

/// Features visible under `view`, in catalog order.
pub fn filter_features(view: FeatureView) -> impl Iterator<Item = &'static Feature> {
    FEATURES.iter().filter(move |f| view.includes(f))
}

/// Pricing toggle audience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlanAudience {
    /// Gym operators
    #[default]
    Gyms,
    /// Gym members
    Members,
}

impl PlanAudience {
    /// Toggle label.
    pub fn label(&self) -> &'static str {
        match self {
            PlanAudience::Gyms => "For Gyms",
            PlanAudience::Members => "For Gym Members",
        }
    }
}

/// One pricing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Card title
    pub name: &'static str,
    /// Subtitle
    pub tagline: &'static str,
    /// Headline price
    pub price: &'static str,
    /// Unit next to the price
    pub period: &'static str,
    /// Optional ribbon ("Most Popular")
    pub badge: Option<&'static str>,
    /// Call to action
    pub cta: &'static str,
    /// Small print under the CTA
    pub note: Option<&'static str>,
    /// Included items
    pub features: &'static [&'static str],
}

static GYM_PLANS: [Plan; 1] = [Plan {
    name: "Gym Management Platform",
    tagline: "Complete solution for modern gym operations",
    price: "Custom",
    period: "pricing",
    badge: Some("Enterprise"),
    cta: "Contact Sales",
    note: Some("Get a custom quote based on your gym's needs"),
    features: &[
        "Analytics & Decision Making",
        "IoT Data to Track Devices",
        "Efficiency Monitoring",
        "Member Management System",
        "Revenue Optimization Tools",
        "Advanced Reporting Dashboard",
        "Custom Integrations",
        "24/7 Priority Support",
    ],
}];

static MEMBER_PLANS: [Plan; 2] = [
    Plan {
        name: "Free",
        tagline: "Perfect for getting started",
        price: "$0",
        period: "/month",
        badge: None,
        cta: "Download Free",
        note: None,
        features: &[
            "Basic Workout Tracking",
            "Class Booking",
            "Gym Check-in",
            "Basic Progress Reports",
        ],
    },
    Plan {
        name: "Premium",
        tagline: "Unlock your full potential",
        price: "$9.99",
        period: "/month",
        badge: Some("Most Popular"),
        cta: "Start Premium",
        note: Some("7-day free trial included"),
        features: &[
            "Advanced Workout Analytics",
            "Personalized Training Plans",
            "Nutrition Tracking",
            "Premium Class Access",
            "AI-Powered Insights",
            "Social Features",
            "Priority Booking",
            "Offline Workout Access",
        ],
    },
];

/// Pricing cards for `audience`.
pub fn plans_for(audience: PlanAudience) -> &'static [Plan] {
    match audience {
        PlanAudience::Gyms => &GYM_PLANS,
        PlanAudience::Members => &MEMBER_PLANS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_filter_counts() {
        assert_eq!(filter_features(FeatureView::Both).count(), 10);
        assert_eq!(filter_features(FeatureView::Dashboard).count(), 5);
        assert_eq!(filter_features(FeatureView::Mobile).count(), 6);
    }

    #[test]
    fn shared_feature_appears_in_both_platforms() {
        let title = "Smart Notifications";
        assert!(filter_features(FeatureView::Dashboard).any(|f| f.title == title));
        assert!(filter_features(FeatureView::Mobile).any(|f| f.title == title));
    }

    #[test]
    fn plans_per_audience() {
        let gyms = plans_for(PlanAudience::Gyms);
        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].cta, "Contact Sales");
        assert_eq!(gyms[0].features.len(), 8);

        let members = plans_for(PlanAudience::Members);
        assert_eq!(members.iter().map(|p| p.name).collect::<Vec<_>>(), ["Free", "Premium"]);
        assert_eq!(members[1].badge, Some("Most Popular"));
    }
}
