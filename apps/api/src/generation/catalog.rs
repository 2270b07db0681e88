//! Fixed recommendation table served by the catalog generator.

use crate::models::recommendation::{Course, RecommendationRecord};

/// Interests substituted into the profile when the user picked none.
pub const FALLBACK_INTERESTS: &[&str] = &["Technology & Computing", "Business & Finance"];

/// Strengths substituted into the profile when the user picked none.
pub const FALLBACK_STRENGTHS: &[&str] = &["Analytical Thinking", "Problem Solving", "Communication"];

fn course(title: &str, provider: &str, url: &str) -> Course {
    Course {
        title: title.to_string(),
        provider: provider.to_string(),
        url: url.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The five career records, in table order (not ranked).
pub fn career_catalog() -> Vec<RecommendationRecord> {
    vec![
        RecommendationRecord {
            title: "Data Scientist".to_string(),
            description: "Data scientists utilize their analytical, statistical, and programming skills to collect, analyze, and interpret large data sets. They then use this information to develop data-driven solutions to difficult business challenges.".to_string(),
            match_score: 92,
            salary_range: "$100,000 - $150,000 per year".to_string(),
            growth_text: "22% (Much faster than average)".to_string(),
            education_requirement: "Master's degree in Data Science, Statistics, Computer Science, or related field".to_string(),
            key_skills: strings(&[
                "Python",
                "Machine Learning",
                "Statistical Analysis",
                "Data Visualization",
                "SQL",
                "Problem Solving",
            ]),
            courses: vec![
                course(
                    "Introduction to Data Science",
                    "Coursera",
                    "https://www.coursera.org/specializations/data-science",
                ),
                course(
                    "Machine Learning Specialization",
                    "Stanford Online",
                    "https://www.coursera.org/specializations/machine-learning",
                ),
                course(
                    "Data Science Professional Certificate",
                    "edX",
                    "https://www.edx.org/professional-certificate/ibm-data-science",
                ),
            ],
        },
        RecommendationRecord {
            title: "UX/UI Designer".to_string(),
            description: "UX/UI Designers create meaningful and relevant experiences for users. This involves the design of the entire process of acquiring and integrating the product, including aspects of branding, design, usability, and function.".to_string(),
            match_score: 87,
            salary_range: "$85,000 - $125,000 per year".to_string(),
            growth_text: "13% (Faster than average)".to_string(),
            education_requirement: "Bachelor's degree in Design, HCI, or related field".to_string(),
            key_skills: strings(&[
                "User Research",
                "Wireframing",
                "Prototyping",
                "Visual Design",
                "Figma/Adobe XD",
                "Empathy",
            ]),
            courses: vec![
                course(
                    "UX Design Professional Certificate",
                    "Google",
                    "https://www.coursera.org/professional-certificates/google-ux-design",
                ),
                course(
                    "UI/UX Design Bootcamp",
                    "Udemy",
                    "https://www.udemy.com/course/ui-ux-web-design-using-adobe-xd",
                ),
                course(
                    "Interaction Design Specialization",
                    "Coursera",
                    "https://www.coursera.org/specializations/interaction-design",
                ),
            ],
        },
        RecommendationRecord {
            title: "Software Engineer".to_string(),
            description: "Software Engineers design, develop, and maintain software systems. They use programming languages and frameworks to create applications and solutions for various problems across industries.".to_string(),
            match_score: 85,
            salary_range: "$90,000 - $140,000 per year".to_string(),
            growth_text: "15% (Much faster than average)".to_string(),
            education_requirement: "Bachelor's degree in Computer Science or related field".to_string(),
            key_skills: strings(&[
                "JavaScript",
                "Python",
                "Problem Solving",
                "Algorithms",
                "System Design",
                "Teamwork",
            ]),
            courses: vec![
                course(
                    "CS50: Introduction to Computer Science",
                    "Harvard University",
                    "https://www.edx.org/cs50",
                ),
                course(
                    "Full Stack Web Development",
                    "Meta",
                    "https://www.coursera.org/professional-certificates/meta-front-end-developer",
                ),
                course(
                    "The Complete Web Developer Bootcamp",
                    "Udemy",
                    "https://www.udemy.com/course/the-complete-web-development-bootcamp",
                ),
            ],
        },
        RecommendationRecord {
            title: "Digital Marketing Specialist".to_string(),
            description: "Digital Marketing Specialists develop and implement marketing strategies across digital channels to increase brand visibility, engage customers, and drive business growth.".to_string(),
            match_score: 78,
            salary_range: "$60,000 - $95,000 per year".to_string(),
            growth_text: "10% (Faster than average)".to_string(),
            education_requirement: "Bachelor's degree in Marketing, Communications, or related field".to_string(),
            key_skills: strings(&[
                "SEO",
                "Content Marketing",
                "Social Media",
                "Analytics",
                "Email Marketing",
                "Creativity",
            ]),
            courses: vec![
                course(
                    "Digital Marketing Specialization",
                    "Coursera",
                    "https://www.coursera.org/specializations/digital-marketing",
                ),
                course(
                    "Google Digital Marketing & E-commerce Certificate",
                    "Google",
                    "https://www.coursera.org/professional-certificates/google-digital-marketing-ecommerce",
                ),
                course(
                    "Complete Digital Marketing Course",
                    "Udemy",
                    "https://www.udemy.com/course/complete-digital-marketing-course",
                ),
            ],
        },
        RecommendationRecord {
            title: "Healthcare Administrator".to_string(),
            description: "Healthcare Administrators plan, direct, and coordinate medical and health services. They manage facilities, clinical departments, or medical practices to ensure efficiency and quality care delivery.".to_string(),
            match_score: 72,
            salary_range: "$70,000 - $120,000 per year".to_string(),
            growth_text: "28% (Much faster than average)".to_string(),
            education_requirement: "Bachelor's or Master's degree in Healthcare Administration, Public Health, or related field".to_string(),
            key_skills: strings(&[
                "Leadership",
                "Healthcare Operations",
                "Regulatory Compliance",
                "Financial Management",
                "Communication",
                "Problem Solving",
            ]),
            courses: vec![
                course(
                    "Healthcare Administration Specialization",
                    "Coursera",
                    "https://www.coursera.org/specializations/healthcare-administration",
                ),
                course(
                    "MicroMasters in Healthcare Administration",
                    "edX",
                    "https://www.edx.org/micromasters/healthcare-administration",
                ),
                course(
                    "Healthcare Management Certificate",
                    "Harvard Extension School",
                    "https://extension.harvard.edu/academics/programs/healthcare-management-graduate-certificate",
                ),
            ],
        },
    ]
}
