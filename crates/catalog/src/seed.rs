//! Initial catalog contents.

use fibertech_core::ProductId;

use crate::product::Product;

fn seed(id: &str, title: &str, code: &str, description: &str, image_url: &str, category: &str) -> Product {
    Product {
        id: ProductId::from(id),
        title: title.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        published: true,
        full_description: None,
        specifications: Vec::new(),
        features: Vec::new(),
        documents: Vec::new(),
    }
}

/// The fixed seed list, used only when no persisted catalog document
/// exists yet. Seed records start published so the public listing is not
/// empty on first run.
pub fn seed_products() -> Vec<Product> {
    vec![
        seed(
            "odf-rack-24",
            "ODF Rack 24 Ports",
            "ODF-R24",
            "High-quality 24-port optical distribution frame rack, perfect for medium-sized network installations.",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?q=80&w=1000",
            "odf",
        ),
        seed(
            "fiber-cable-sm",
            "Single-Mode Fiber Cable",
            "FC-SM-1000",
            "Premium single-mode fiber optic cable, 1000m roll, suitable for long-distance transmission.",
            "https://images.unsplash.com/photo-1605810230434-7631ac76ec81?q=80&w=1000",
            "fiber-cables",
        ),
        seed(
            "fiber-splice-kit",
            "Fiber Splicing Kit",
            "FSK-PRO",
            "Complete professional fiber splicing kit with all necessary tools and components for field installations.",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?q=80&w=1000",
            "accessories",
        ),
        seed(
            "otdr-tester",
            "OTDR Fiber Tester",
            "OTDR-T2000",
            "Advanced Optical Time Domain Reflectometer for precise testing and troubleshooting of fiber optic networks.",
            "https://images.unsplash.com/photo-1555255707-c07966088b7b?q=80&w=1000",
            "testing-equipment",
        ),
    ]
}
