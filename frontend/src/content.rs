//! Static copy shared by the desktop and mobile layouts.

pub const PRODUCT_NAME: &str = "OrgLookup";

pub const STEP_LABELS: [&str; 5] = [
    "Detect obsolete components of your org",
    "Analyze the impact of deleting these components",
    "Scan beyond Salesforce org for external code dependencies",
    "Add components to deletion queue",
    "AI guide you through safe step-by-step deletion plan",
];

pub struct PainPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tint: &'static str,
}

pub const PAIN_POINTS: &[PainPoint] = &[
    PainPoint { icon: "🗄️", title: "Hundreds of fields", description: "nobody knows what's safe to remove", tint: "#fef2f2" },
    PainPoint { icon: "🔀", title: "Overlapping automation", description: "Workflow Rules, Flows, Apex all conflict", tint: "#fff7ed" },
    PainPoint { icon: "🙈", title: "Invisible dependencies", description: "simple changes break production", tint: "#fefce8" },
    PainPoint { icon: "🔗", title: "External references", description: "Git repos still use 'unused' fields", tint: "#eff6ff" },
    PainPoint { icon: "⏱️", title: "No time to clean", description: "impact impossible to quantify", tint: "#faf5ff" },
];

/// A bullet rendered as a bold lead-in followed by plain text.
pub type Bullet = (&'static str, &'static str);

pub struct TimelineEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub bullets: [Bullet; 3],
    pub image_src: &'static str,
}

pub const TIMELINE: [TimelineEntry; 5] = [
    TimelineEntry {
        title: "Instant Obsolete Detection",
        subtitle: "Get a Prioritized List of Technical Debt",
        bullets: [
            ("Surface risky or low-value metadata", " (fields, objects, Flows, classes, etc.)"),
            ("Score items", " by usage, recency, dependency depth"),
            ("Build a realistic cleanup backlog", " filtered by object, business area, or risk"),
        ],
        image_src: "/obsolescence-list.svg",
    },
    TimelineEntry {
        title: "Visual Impact Analysis",
        subtitle: "See What Might Break Before You Change Anything",
        bullets: [
            ("Interactive dependency map", ": Flows ⇄ Apex ⇄ Validation Rules ⇄ Layouts ⇄ Reports"),
            ("Detect overlapping or redundant automation", ""),
            ("Generate shareable visuals", " to align admins, devs, and business stakeholders"),
        ],
        image_src: "/dependencies-map.svg",
    },
    TimelineEntry {
        title: "External Code Scanning",
        subtitle: "Find External Dependencies Automatically",
        bullets: [
            ("Connect GitHub/GitLab/Bitbucket", ""),
            ("Detect references", " in Apex, JS, integrations, scheduled scripts"),
            ("Avoid breaking APIs or data pipelines", " tied to legacy fields"),
        ],
        image_src: "/sync_v2.png",
    },
    TimelineEntry {
        title: "Create Deletion Queue",
        subtitle: "Review and Organize Your Selected Metadata",
        bullets: [
            ("View all metadata items", " you've added to the deletion queue from steps 1 and 2"),
            ("Review the consolidated list", " of selected items"),
            ("Organize and manage", " your deletion queue before execution"),
        ],
        image_src: "/obsolescence-list.svg",
    },
    TimelineEntry {
        title: "Automated Safe Execution",
        subtitle: "Execute with Confidence, and Keep the Audit Trail",
        bullets: [
            ("Export a structured, step-by-step action plan", ""),
            ("Generate deployment-ready metadata packages", " (Salesforce CLI / CI/CD)"),
            ("Track every change", " for future admins and auditors"),
        ],
        image_src: "/obsolescence-list.svg",
    },
];

pub const MANUAL_PROCESS: [Bullet; 5] = [
    ("Manually hunt for unused fields", ", objects, and layouts across Setup, reports, and page layouts"),
    ("Check references for each field", " across Flows, Apex, and layouts"),
    ("Search Git repos and external apps", " for legacy references"),
    ("Design safe deletion order", " to avoid breaking production"),
    ("Document everything manually", " in spreadsheets"),
];

pub const ORGLOOKUP_PROCESS: [Bullet; 5] = [
    ("Get prioritized list", " of suspicious or low-value metadata"),
    ("Visualize dependencies", " between Flows, Apex, and layouts"),
    ("Auto-detect references", " in GitHub/GitLab/Bitbucket"),
    ("Build safe deletion queues", " (deactivate → archive → clean → delete)"),
    ("Export documented action plan", ""),
];

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Benefit; 4] = [
    Benefit { icon: "👁️", title: "A clear view of your org's technical debt", description: "no more surprises" },
    Benefit { icon: "⚡", title: "Faster, safer changes", description: "less time on impact analysis and troubleshooting" },
    Benefit { icon: "🤝", title: "Shared understanding across teams", description: "a single source of truth" },
    Benefit { icon: "📦", title: "Easy redeployment across environments", description: "deploy cleanup changes to all your orgs effortlessly" },
];

pub const FORM_HEADING: &str = "Early Access Beta: Help Shape How Salesforce Teams Tackle Technical Debt";
pub const PRIVACY_NOTE: &str = "We respect your privacy and will never share your information.";

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("How it works", "#how-it-works"),
    ("Features", "#features"),
    ("Pricing", "#contact-form"),
];
