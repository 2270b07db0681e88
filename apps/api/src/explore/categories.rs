use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerCategory {
    pub id: &'static str,
    pub name: &'static str,
    /// Icon key resolved by the frontend.
    pub icon: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingCareer {
    pub title: &'static str,
    pub growth: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSearchHit {
    pub category_id: &'static str,
    pub category_name: &'static str,
    pub career: &'static str,
}

pub const CAREER_CATEGORIES: &[CareerCategory] = &[
    CareerCategory {
        id: "technology",
        name: "Technology",
        icon: "Computer",
        description: "Careers in software development, IT, cybersecurity, and more",
        careers: &[
            "Software Developer",
            "Data Scientist",
            "Cybersecurity Specialist",
            "Cloud Architect",
            "DevOps Engineer",
        ],
    },
    CareerCategory {
        id: "healthcare",
        name: "Healthcare",
        icon: "Heart",
        description: "Careers in medicine, nursing, therapy, and healthcare administration",
        careers: &[
            "Physician",
            "Registered Nurse",
            "Physical Therapist",
            "Healthcare Administrator",
            "Medical Technologist",
        ],
    },
    CareerCategory {
        id: "business",
        name: "Business & Finance",
        icon: "BarChart",
        description: "Careers in management, finance, marketing, and entrepreneurship",
        careers: &[
            "Financial Analyst",
            "Marketing Manager",
            "Business Consultant",
            "Human Resources Specialist",
            "Project Manager",
        ],
    },
    CareerCategory {
        id: "creative",
        name: "Creative Arts",
        icon: "Palette",
        description: "Careers in design, writing, performing arts, and media",
        careers: &[
            "UX/UI Designer",
            "Content Creator",
            "Graphic Designer",
            "Video Producer",
            "Creative Director",
        ],
    },
    CareerCategory {
        id: "education",
        name: "Education",
        icon: "GraduationCap",
        description: "Careers in teaching, counseling, administration, and training",
        careers: &[
            "Teacher",
            "School Counselor",
            "Instructional Designer",
            "Education Administrator",
            "Corporate Trainer",
        ],
    },
    CareerCategory {
        id: "science",
        name: "Sciences",
        icon: "Flask",
        description: "Careers in research, development, environment, and laboratory work",
        careers: &[
            "Research Scientist",
            "Environmental Specialist",
            "Biochemist",
            "Geologist",
            "Meteorologist",
        ],
    },
];

pub const TRENDING_CAREERS: &[TrendingCareer] = &[
    TrendingCareer { title: "Data Scientist", growth: "+22%" },
    TrendingCareer { title: "Blockchain Developer", growth: "+30%" },
    TrendingCareer { title: "Healthcare Administrator", growth: "+28%" },
    TrendingCareer { title: "Digital Marketing Specialist", growth: "+10%" },
    TrendingCareer { title: "Remote Learning Coordinator", growth: "+12%" },
];

/// Looks a category up by id; unknown ids resolve to the first category.
pub fn category_or_default(id: &str) -> &'static CareerCategory {
    CAREER_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CAREER_CATEGORIES[0])
}

/// Case-insensitive substring search over every category's careers.
/// A blank query matches nothing.
pub fn search_careers(query: &str) -> Vec<CareerSearchHit> {
    let lowered = query.trim().to_lowercase();
    let needle = lowered.as_str();
    if needle.is_empty() {
        return vec![];
    }

    CAREER_CATEGORIES
        .iter()
        .flat_map(move |category| {
            category
                .careers
                .iter()
                .filter(move |career| career.to_lowercase().contains(needle))
                .map(move |&career| CareerSearchHit {
                    category_id: category.id,
                    category_name: category.name,
                    career,
                })
        })
        .collect()
}
