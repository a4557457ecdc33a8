// Static site content. Everything here is fixed at compile time; views
// borrow from these tables and never mutate them.

#[derive(Debug, PartialEq, Eq)]
pub struct EventInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
}

pub const EVENT: EventInfo = EventInfo {
    name: "MoneyHacks",
    title: "MoneyHacks - AI Valley × AI Collective Stanford Fintech Hackathon",
    tagline: "Join the premier fintech hackathon where innovation meets opportunity",
    date: "August 2-3, 2025",
    location: "House of Web3",
    duration: "36-48 hours",
};

#[derive(Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Hosts", anchor: "hosts" },
    NavItem { label: "Tracks", anchor: "tracks" },
    NavItem { label: "Sponsors", anchor: "sponsors" },
    NavItem { label: "Judges", anchor: "judges" },
    NavItem { label: "Speakers", anchor: "speakers" },
    NavItem { label: "Schedule", anchor: "schedule" },
    NavItem { label: "Prizes", anchor: "prizes" },
    NavItem { label: "FAQ", anchor: "faq" },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Participants", value: 200, prefix: "", suffix: "+" },
    Stat { label: "Prize Pool", value: 20_000, prefix: "$", suffix: "+" },
    Stat { label: "Mentors", value: 30, prefix: "", suffix: "+" },
    Stat { label: "Workshops", value: 12, prefix: "", suffix: "" },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    pub ideas: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub prize: &'static str,
}

pub const TRACKS: &[Track] = &[
    Track {
        id: "payments",
        title: "Payments",
        icon: "💳",
        description: "Revolutionize how money moves in the digital economy",
        accent: "linear-gradient(90deg, #3b82f6, #06b6d4)",
        ideas: &[
            "Smart routing optimization",
            "Fraud detection systems",
            "Bank-to-bank checkout UX",
            "Invoice intelligence",
        ],
        tools: &["Stripe API", "Plaid", "Banking APIs", "ML frameworks"],
        prize: "$5,000",
    },
    Track {
        id: "investing",
        title: "Investing/Wealth-Tech",
        icon: "📈",
        description: "Democratize access to sophisticated investment strategies",
        accent: "linear-gradient(90deg, #22c55e, #10b981)",
        ideas: &[
            "AI portfolio management",
            "Tax-aware rebalancing",
            "ESG impact screening",
            "Alternative data signals",
        ],
        tools: &["Alpha Vantage", "Polygon.io", "OpenAI", "TensorFlow"],
        prize: "$5,000",
    },
    Track {
        id: "web3",
        title: "Web3/DeFi",
        icon: "🔗",
        description: "Build the decentralized financial infrastructure of tomorrow",
        accent: "linear-gradient(90deg, #a855f7, #ec4899)",
        ideas: &[
            "Smart wallet solutions",
            "On-chain credit scoring",
            "Cross-chain settlements",
            "Stablecoin payments",
        ],
        tools: &["Ethereum", "Solana", "Chainlink", "TheGraph"],
        prize: "$5,000",
    },
    Track {
        id: "wildcard",
        title: "Wildcard",
        icon: "🚀",
        description: "Push the boundaries of fintech innovation",
        accent: "linear-gradient(90deg, #f97316, #ef4444)",
        ideas: &[
            "Climate fintech",
            "Creator economy",
            "Student finance",
            "Open innovation",
        ],
        tools: &["Any API", "Any framework", "Any blockchain", "Any data source"],
        prize: "$5,000",
    },
];

pub fn track_by_id(id: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|t| t.id == id)
}

/// Agenda item categories. Fixed set; each maps to a display glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Logistics,
    Ceremony,
    Meal,
    Milestone,
    Workshop,
}

impl EntryKind {
    pub fn icon(&self) -> &'static str {
        match self {
            EntryKind::Logistics => "📍",
            EntryKind::Ceremony => "🏆",
            EntryKind::Meal => "🍽️",
            EntryKind::Milestone => "💻",
            EntryKind::Workshop => "🎤",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EntryKind::Logistics => "#64748b",
            EntryKind::Ceremony => "#a855f7",
            EntryKind::Meal => "#22c55e",
            EntryKind::Milestone => "#3b82f6",
            EntryKind::Workshop => "#f59e0b",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub kind: EntryKind,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ScheduleDay {
    pub label: &'static str,
    pub entries: &'static [ScheduleEntry],
}

pub const SCHEDULE: &[ScheduleDay] = &[
    ScheduleDay {
        label: "August 2",
        entries: &[
            ScheduleEntry { time: "8:30 AM", title: "Networking + Breakfast", kind: EntryKind::Meal },
            ScheduleEntry { time: "10:00 AM", title: "Opening Speeches", kind: EntryKind::Ceremony },
            ScheduleEntry { time: "10:30 AM", title: "HACK TIME", kind: EntryKind::Milestone },
            ScheduleEntry { time: "12:00 PM", title: "Lunch", kind: EntryKind::Meal },
            ScheduleEntry { time: "1:00 PM", title: "Workshops / Speakers", kind: EntryKind::Workshop },
            ScheduleEntry { time: "6:00 PM", title: "Dinner", kind: EntryKind::Meal },
            ScheduleEntry { time: "7:00 PM", title: "Continue hacking", kind: EntryKind::Milestone },
        ],
    },
    ScheduleDay {
        label: "August 3",
        entries: &[
            ScheduleEntry { time: "9:00 AM", title: "Breakfast", kind: EntryKind::Meal },
            ScheduleEntry { time: "9:00 AM", title: "Keep pushing", kind: EntryKind::Milestone },
            ScheduleEntry { time: "11:45 AM", title: "Note from organizers", kind: EntryKind::Logistics },
            ScheduleEntry { time: "12:00 PM", title: "Lunch", kind: EntryKind::Meal },
            ScheduleEntry { time: "3:14 PM", title: "Git push deadline", kind: EntryKind::Milestone },
            ScheduleEntry { time: "3:45 PM", title: "Hackfair (everyone can demo)", kind: EntryKind::Milestone },
            ScheduleEntry { time: "5:30 PM", title: "Final Demos", kind: EntryKind::Ceremony },
            ScheduleEntry { time: "6:30 PM", title: "Awards & Closing Ceremony", kind: EntryKind::Ceremony },
        ],
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FaqGroup {
    pub category: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const FAQS: &[FaqGroup] = &[
    FaqGroup {
        category: "General",
        entries: &[
            FaqEntry {
                question: "What is MoneyHacks?",
                answer: "MoneyHacks is a 36-48 hour fintech hackathon organized by AI Valley and AI Collective Stanford Chapter. It brings together builders, students, and industry professionals to create innovative financial technology solutions.",
            },
            FaqEntry {
                question: "When and where is the hackathon?",
                answer: "The hackathon takes place on August 2-3, 2025, at House of Web3. The event runs for 36-48 hours straight.",
            },
            FaqEntry {
                question: "Who can participate?",
                answer: "The hackathon is open to students, developers, designers, and anyone passionate about fintech innovation. Teams can have 1-4 members.",
            },
            FaqEntry {
                question: "Is there a registration fee?",
                answer: "No, participation is completely free. We'll also provide meals, snacks, and refreshments throughout the event.",
            },
        ],
    },
    FaqGroup {
        category: "Technical",
        entries: &[
            FaqEntry {
                question: "What should I build?",
                answer: "You can build any fintech solution that fits into one of our four tracks: Payments, Investing/Wealth-Tech, Web3/DeFi, or Wildcard. We encourage innovative solutions that solve real problems.",
            },
            FaqEntry {
                question: "Can I use pre-existing code?",
                answer: "You can use open-source libraries and frameworks, but the core application must be built during the hackathon. Any pre-existing code must be disclosed.",
            },
            FaqEntry {
                question: "What technologies can I use?",
                answer: "You're free to use any programming language, framework, or API. We'll provide access to various fintech APIs and cloud credits from our sponsors.",
            },
        ],
    },
    FaqGroup {
        category: "Logistics",
        entries: &[
            FaqEntry {
                question: "Will food be provided?",
                answer: "Yes! We'll provide all meals, snacks, and beverages throughout the hackathon. We'll accommodate dietary restrictions - just let us know when you register.",
            },
            FaqEntry {
                question: "Can I sleep at the venue?",
                answer: "Yes, the venue will be open 24/7 during the hackathon. We'll have designated quiet areas for rest, but we recommend bringing a sleeping bag or blanket.",
            },
            FaqEntry {
                question: "What should I bring?",
                answer: "Bring your laptop, chargers, any hardware you might need, toiletries, and a change of clothes. We'll provide everything else!",
            },
        ],
    },
    FaqGroup {
        category: "Prizes",
        entries: &[
            FaqEntry {
                question: "What are the prizes?",
                answer: "We have $20,000+ in total prizes, with $5,000 for each track winner. There are also special prizes for categories like Best Risk/Compliance Solution and Best Data Story.",
            },
            FaqEntry {
                question: "How is judging conducted?",
                answer: "Projects are judged on innovation (25%), technical implementation (25%), business viability (25%), and presentation (25%). Each team will have 5 minutes to present followed by Q&A.",
            },
            FaqEntry {
                question: "Can I win multiple prizes?",
                answer: "Yes! Your project can win both a track prize and special category prizes. However, you can only win one track prize.",
            },
        ],
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct HostStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Host {
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub website: Option<&'static str>,
    pub stats: &'static [HostStat],
    pub accent: &'static str,
}

pub const HOSTS: &[Host] = &[
    Host {
        name: "AI Valley",
        logo: "🏔️",
        description: "AI Valley is a thriving community of builders, innovators, and entrepreneurs pushing the boundaries of artificial intelligence and technology. We bring together the brightest minds to create the future through hackathons, workshops, and collaborative projects.",
        website: Some("https://aivalley.io"),
        stats: &[
            HostStat { label: "Community Members", value: "5,000+" },
            HostStat { label: "Events Hosted", value: "50+" },
            HostStat { label: "Projects Launched", value: "200+" },
        ],
        accent: "linear-gradient(90deg, #3b82f6, #06b6d4)",
    },
    Host {
        name: "AI Collective Stanford",
        logo: "🎓",
        description: "The Stanford chapter of AI Collective brings together students, researchers, and industry professionals to explore the frontiers of artificial intelligence. We foster innovation through academic excellence and real-world application.",
        website: None,
        stats: &[
            HostStat { label: "Student Members", value: "500+" },
            HostStat { label: "Global Reach", value: "10+ Countries" },
            HostStat { label: "Research Papers", value: "100+" },
        ],
        accent: "linear-gradient(90deg, #ef4444, #f59e0b)",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Sponsor {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SponsorTier {
    pub name: &'static str,
    pub accent: &'static str,
    pub card_class: &'static str,
    pub sponsors: &'static [Sponsor],
}

// Sponsor entries are samples until real sponsors are confirmed.
pub const SPONSOR_TIERS: &[SponsorTier] = &[
    SponsorTier {
        name: "Platinum",
        accent: "linear-gradient(90deg, #cbd5e1, #94a3b8)",
        card_class: "sponsor-lg",
        sponsors: &[Sponsor { name: "TechCorp", logo: "🏢" }],
    },
    SponsorTier {
        name: "Gold",
        accent: "linear-gradient(90deg, #facc15, #eab308)",
        card_class: "sponsor-md",
        sponsors: &[
            Sponsor { name: "FinanceAPI", logo: "💳" },
            Sponsor { name: "CloudProvider", logo: "☁️" },
        ],
    },
    SponsorTier {
        name: "Silver",
        accent: "linear-gradient(90deg, #d1d5db, #9ca3af)",
        card_class: "sponsor-sm",
        sponsors: &[
            Sponsor { name: "DataCo", logo: "📊" },
            Sponsor { name: "SecurityFirm", logo: "🔒" },
            Sponsor { name: "DevTools", logo: "🛠️" },
        ],
    },
    SponsorTier {
        name: "Bronze",
        accent: "linear-gradient(90deg, #ea580c, #c2410c)",
        card_class: "sponsor-xs",
        sponsors: &[
            Sponsor { name: "StartupA", logo: "🚀" },
            Sponsor { name: "StartupB", logo: "💡" },
            Sponsor { name: "StartupC", logo: "⚡" },
            Sponsor { name: "StartupD", logo: "🎯" },
        ],
    },
];

/// Name used in judge/speaker rows that only reserve a slot. Rows carrying
/// it are hidden behind the announcement cards until real people land.
pub const PLACEHOLDER_NAME: &str = "Coming Soon";

#[derive(Debug, PartialEq, Eq)]
pub struct Judge {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub bio: &'static str,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub expertise: &'static [&'static str],
}

pub const JUDGES: &[Judge] = &[Judge {
    name: "Coming Soon",
    title: "Expert Judge",
    company: "Leading Fintech Company",
    bio: "Industry expert with years of experience in fintech innovation.",
    linkedin: None,
    twitter: None,
    expertise: &["Fintech", "AI", "Payments"],
}];

pub fn confirmed_judges() -> impl Iterator<Item = &'static Judge> {
    JUDGES.iter().filter(|j| j.name != PLACEHOLDER_NAME)
}

#[derive(Debug, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub topic: &'static str,
    pub time: &'static str,
    pub track: &'static str,
}

pub const SPEAKERS: &[Speaker] = &[Speaker {
    name: "Coming Soon",
    title: "Workshop Leader",
    company: "Tech Company",
    topic: "Building Modern Payment Systems",
    time: "August 2, 8:00 PM",
    track: "payments",
}];

pub fn confirmed_speakers() -> impl Iterator<Item = &'static Speaker> {
    SPEAKERS.iter().filter(|s| s.name != PLACEHOLDER_NAME)
}

#[derive(Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "💻",
        title: "Build Real Solutions",
        description: "Create production-ready MVPs that solve actual fintech challenges",
    },
    Benefit {
        icon: "💡",
        title: "Learn from Experts",
        description: "Get mentorship from industry leaders and successful founders",
    },
    Benefit {
        icon: "🚀",
        title: "Launch Your Startup",
        description: "Turn your hackathon project into a funded venture",
    },
    Benefit {
        icon: "🎯",
        title: "Win Big Prizes",
        description: "$20,000+ in prizes and opportunities for continued support",
    },
    Benefit {
        icon: "⏱️",
        title: "36-48 Hours",
        description: "Intensive building session with all resources provided",
    },
    Benefit {
        icon: "🏆",
        title: "30-50 MVPs",
        description: "Be part of an incredible showcase of fintech innovation",
    },
];

pub const AUDIENCES: &[&str] = &[
    "Students",
    "Developers",
    "Designers",
    "Product Managers",
    "Entrepreneurs",
    "Finance Professionals",
    "Web3 Builders",
    "AI Engineers",
];

pub const TOTAL_PRIZE_POOL: u32 = 20_000;

#[derive(Debug, PartialEq, Eq)]
pub struct SpecialPrize {
    pub icon: &'static str,
    pub title: &'static str,
    pub prize: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const SPECIAL_PRIZES: &[SpecialPrize] = &[
    SpecialPrize {
        icon: "🧠",
        title: "Best AI Integration",
        prize: "$2,000",
        description: "Most innovative use of AI/ML in fintech",
        accent: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    SpecialPrize {
        icon: "🎯",
        title: "Best Risk/Compliance",
        prize: "$1,500",
        description: "Outstanding approach to regulatory compliance",
        accent: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    SpecialPrize {
        icon: "⚡",
        title: "Best Data Story",
        prize: "$1,500",
        description: "Most compelling use of data visualization",
        accent: "linear-gradient(135deg, #eab308, #f97316)",
    },
    SpecialPrize {
        icon: "⭐",
        title: "People's Choice",
        prize: "$1,000",
        description: "Voted by fellow participants",
        accent: "linear-gradient(135deg, #22c55e, #10b981)",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Criterion {
    pub label: &'static str,
    pub weight: u8,
    pub description: &'static str,
}

pub const JUDGING_CRITERIA: &[Criterion] = &[
    Criterion { label: "Innovation", weight: 25, description: "Creativity and originality of the solution" },
    Criterion { label: "Technical", weight: 25, description: "Code quality and technical implementation" },
    Criterion { label: "Viability", weight: 25, description: "Business model and market potential" },
    Criterion { label: "Presentation", weight: 25, description: "Demo quality and pitch effectiveness" },
];

#[derive(Debug, PartialEq, Eq)]
pub struct WinnerPerk {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const WINNER_PERKS: &[WinnerPerk] = &[
    WinnerPerk { icon: "🏅", label: "Mentorship", description: "Ongoing guidance from industry experts" },
    WinnerPerk { icon: "💰", label: "Funding Access", description: "Introduction to VCs and angel investors" },
    WinnerPerk { icon: "🎖️", label: "Recognition", description: "Feature in AI Valley and Stanford networks" },
];

pub const WORKSHOP_TOPICS: &[&str] = &[
    "Building with Stripe & Plaid APIs",
    "Smart Contract Development",
    "AI/ML in Fintech",
    "Regulatory Compliance 101",
    "Pitch Perfect: Demo Day Prep",
    "Product Design for Finance",
    "Risk Management Systems",
    "Scaling Financial Infrastructure",
];

pub const SPONSOR_BENEFITS: &[&str] = &[
    "Brand Visibility",
    "Talent Pipeline",
    "Innovation Partnership",
    "Community Impact",
    "Thought Leadership",
    "Network Growth",
];

#[derive(Debug, PartialEq, Eq)]
pub struct InvolvementOption {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const INVOLVEMENT_OPTIONS: &[InvolvementOption] = &[
    InvolvementOption { icon: "💎", title: "Sponsor", description: "Support innovation" },
    InvolvementOption { icon: "🤝", title: "Partner", description: "Collaborate with us" },
    InvolvementOption { icon: "⚖️", title: "Judge", description: "Evaluate projects" },
    InvolvementOption { icon: "🎤", title: "Speak", description: "Share expertise" },
];

/// Renders a number with comma separators, e.g. 20000 -> "20,000".
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_tracks_exist() {
        for speaker in SPEAKERS {
            assert!(
                track_by_id(speaker.track).is_some(),
                "speaker {} references unknown track {}",
                speaker.name,
                speaker.track
            );
        }
    }

    #[test]
    fn track_ids_are_unique() {
        for (i, a) in TRACKS.iter().enumerate() {
            for b in &TRACKS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn nav_anchors_are_unique_and_non_empty() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            assert!(!a.anchor.is_empty());
            assert!(!a.anchor.starts_with('#'));
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.anchor, b.anchor);
            }
        }
    }

    #[test]
    fn schedule_days_have_entries() {
        assert!(!SCHEDULE.is_empty());
        for day in SCHEDULE {
            assert!(!day.entries.is_empty(), "day {} has no entries", day.label);
        }
        assert_ne!(SCHEDULE[0].label, SCHEDULE[1].label);
    }

    #[test]
    fn faq_groups_have_entries() {
        assert_eq!(FAQS.len(), 4);
        for group in FAQS {
            assert!(!group.entries.is_empty());
        }
    }

    #[test]
    fn placeholder_rows_are_not_confirmed() {
        assert_eq!(confirmed_judges().count(), 0);
        assert_eq!(confirmed_speakers().count(), 0);
    }

    #[test]
    fn both_hosts_are_present() {
        assert_eq!(HOSTS.len(), 2);
        for host in HOSTS {
            assert!(!host.name.is_empty());
            assert_eq!(host.stats.len(), 3);
        }
    }

    #[test]
    fn judging_weights_sum_to_hundred() {
        let total: u32 = JUDGING_CRITERIA.iter().map(|c| c.weight as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(200), "200");
        assert_eq!(group_thousands(5_000), "5,000");
        assert_eq!(group_thousands(20_000), "20,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn lookup_finds_known_tracks_only() {
        assert_eq!(track_by_id("payments").map(|t| t.title), Some("Payments"));
        assert!(track_by_id("quantum").is_none());
    }
}
