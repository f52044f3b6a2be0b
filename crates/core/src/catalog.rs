//! Built-in learning module catalog.
//!
//! Seed data for the `modules` table. Each entry targets one audience role
//! explicitly via [`AudienceRole`]; role-based filtering goes through this
//! column, never through conventions on the module id.

use std::fmt;

/// Audience a catalog module is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceRole {
    DataScientist,
    BusinessAnalyst,
}

impl AudienceRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DataScientist => "Data Scientist",
            Self::BusinessAnalyst => "Business Analyst",
        }
    }

    /// Map a free-form user role string onto a catalog audience.
    ///
    /// Any role mentioning "Business" belongs to the analyst track;
    /// everything else gets the data-science track.
    pub fn for_user_role(role: &str) -> Self {
        if role.contains("Business") {
            Self::BusinessAnalyst
        } else {
            Self::DataScientist
        }
    }
}

impl fmt::Display for AudienceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One seed entry for the modules catalog.
#[derive(Debug, Clone, Copy)]
pub struct ModuleSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub difficulty: i16,
    pub estimated_minutes: i32,
    pub total_lessons: i32,
    pub xp_reward: i32,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub video_url: &'static str,
    pub thumbnail: &'static str,
    pub audience_role: AudienceRole,
}

/// The default module catalog, seeded by the admin endpoint.
pub const DEFAULT_MODULES: [ModuleSeed; 8] = [
    ModuleSeed {
        id: "ds-python-basics",
        title: "Python Basics",
        category: "Programming",
        difficulty: 1,
        estimated_minutes: 120,
        total_lessons: 8,
        xp_reward: 120,
        description: "Core Python syntax, data structures, and scripting for day-one productivity.",
        tags: &["Python", "Programming", "Fundamentals"],
        video_url: "https://www.youtube.com/embed/rfscVS0vtbw",
        thumbnail: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::DataScientist,
    },
    ModuleSeed {
        id: "ds-pandas-numpy",
        title: "Python for Data (Pandas/Numpy)",
        category: "Data Analysis",
        difficulty: 2,
        estimated_minutes: 180,
        total_lessons: 10,
        xp_reward: 160,
        description: "Wrangle, reshape, and analyze datasets with the core scientific Python stack.",
        tags: &["Pandas", "Numpy", "Data Analysis"],
        video_url: "https://www.youtube.com/embed/vmEHCJofslg",
        thumbnail: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::DataScientist,
    },
    ModuleSeed {
        id: "ds-sql-analytics",
        title: "SQL for Analytics",
        category: "Data Analysis",
        difficulty: 2,
        estimated_minutes: 150,
        total_lessons: 9,
        xp_reward: 150,
        description: "Window functions, aggregation, and query patterns for analytical workloads.",
        tags: &["SQL", "Analytics", "Databases"],
        video_url: "https://www.youtube.com/embed/HXV3zeQKqGY",
        thumbnail: "https://images.pexels.com/photos/256219/pexels-photo-256219.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::DataScientist,
    },
    ModuleSeed {
        id: "ds-ml-basics",
        title: "ML Basics (Scikit-learn)",
        category: "Machine Learning",
        difficulty: 3,
        estimated_minutes: 240,
        total_lessons: 12,
        xp_reward: 200,
        description: "Supervised learning end to end: features, training, evaluation, iteration.",
        tags: &["Machine Learning", "Scikit-learn", "Modeling"],
        video_url: "https://www.youtube.com/embed/0B5eIE_1vpU",
        thumbnail: "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::DataScientist,
    },
    ModuleSeed {
        id: "ba-excel-analysis",
        title: "Excel for Analysis",
        category: "Data Analysis",
        difficulty: 1,
        estimated_minutes: 100,
        total_lessons: 7,
        xp_reward: 100,
        description: "Pivot tables, lookups, and structured analysis workflows in Excel.",
        tags: &["Excel", "Analysis", "Fundamentals"],
        video_url: "https://www.youtube.com/embed/Vl0H-qTclOg",
        thumbnail: "https://images.pexels.com/photos/577210/pexels-photo-577210.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::BusinessAnalyst,
    },
    ModuleSeed {
        id: "ba-sql-basics",
        title: "SQL Basics (BA)",
        category: "Data Analysis",
        difficulty: 1,
        estimated_minutes: 120,
        total_lessons: 8,
        xp_reward: 120,
        description: "Read-oriented SQL for business reporting: joins, filters, aggregates.",
        tags: &["SQL", "Reporting", "Fundamentals"],
        video_url: "https://www.youtube.com/embed/p3qvj9hO_Bo",
        thumbnail: "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::BusinessAnalyst,
    },
    ModuleSeed {
        id: "ba-bi-dashboards",
        title: "BI Dashboards (Power BI/Looker)",
        category: "Business Intelligence",
        difficulty: 2,
        estimated_minutes: 150,
        total_lessons: 9,
        xp_reward: 150,
        description: "Design and publish decision-ready dashboards with modern BI tooling.",
        tags: &["Power BI", "Looker", "Dashboards"],
        video_url: "https://www.youtube.com/embed/AGrl-H87pRU",
        thumbnail: "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::BusinessAnalyst,
    },
    ModuleSeed {
        id: "ba-business-stats",
        title: "Business Stats Fundamentals",
        category: "Statistics",
        difficulty: 2,
        estimated_minutes: 130,
        total_lessons: 8,
        xp_reward: 130,
        description: "Descriptive statistics, distributions, and significance for business decisions.",
        tags: &["Statistics", "Analysis", "Decision Making"],
        video_url: "https://www.youtube.com/embed/xxpc-HPKN28",
        thumbnail: "https://images.pexels.com/photos/186461/pexels-photo-186461.jpeg?auto=compress&cs=tinysrgb&w=400",
        audience_role: AudienceRole::BusinessAnalyst,
    },
];
