//! Built-in sample projects.
//!
//! Shown when neither the live API nor the cache can produce data, so the
//! site always renders a populated portfolio.

use atelier_db::models::project::{Category, Project};
use uuid::Uuid;

/// The three demo case studies baked into the site.
pub fn sample_projects() -> Vec<Project> {
    let now = chrono::Utc::now();
    vec![
        Project {
            id: Uuid::from_u128(1),
            title: "Modern Office Space".to_string(),
            description: "A stunning modern office space in the heart of the city featuring \
                contemporary design elements, open layouts, and premium finishes. This project \
                showcases our ability to create functional yet beautiful commercial spaces that \
                inspire productivity and creativity. The design incorporates natural light, \
                sustainable materials, and flexible workspaces that adapt to the evolving needs \
                of modern businesses."
                .to_string(),
            category: Category::Commercial,
            kind: "Office".to_string(),
            size: "2,500 sq ft".to_string(),
            location: "Downtown Manhattan".to_string(),
            thumbnail: "/bgs/UC_06048.JPG".to_string(),
            pictures: vec![
                "/bgs/UC_06048.JPG".to_string(),
                "/bgs/UC_06123.JPG".to_string(),
                "/bgs/UC_05990.JPG".to_string(),
            ],
            created_at: now,
        },
        Project {
            id: Uuid::from_u128(2),
            title: "Luxury Apartment".to_string(),
            description: "Elegant luxury apartment with breathtaking city views, featuring \
                high-end materials, custom furnishings, and a sophisticated color palette that \
                creates a serene living environment. Every detail has been carefully considered \
                to create a harmonious balance between comfort and style, from the custom \
                millwork to the curated art collection."
                .to_string(),
            category: Category::Residential,
            kind: "Apartment".to_string(),
            size: "1,200 sq ft".to_string(),
            location: "Brooklyn Heights".to_string(),
            thumbnail: "/bgs/UC_06048.JPG".to_string(),
            pictures: vec![
                "/bgs/UC_06048.JPG".to_string(),
                "/bgs/UC_05990.JPG".to_string(),
            ],
            created_at: now,
        },
        Project {
            id: Uuid::from_u128(3),
            title: "Retail Storefront".to_string(),
            description: "Prime retail location with high foot traffic, designed to maximize \
                customer engagement through strategic layout, lighting, and visual merchandising \
                elements. The space combines modern aesthetics with practical functionality, \
                creating an inviting atmosphere that encourages exploration and enhances the \
                shopping experience."
                .to_string(),
            category: Category::Commercial,
            kind: "Retail".to_string(),
            size: "800 sq ft".to_string(),
            location: "SoHo District".to_string(),
            thumbnail: "/bgs/UC_06123.JPG".to_string(),
            pictures: vec![
                "/bgs/UC_06123.JPG".to_string(),
                "/bgs/UC_06048.JPG".to_string(),
            ],
            created_at: now,
        },
    ]
}
