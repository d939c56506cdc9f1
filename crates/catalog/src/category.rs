//! Fixed product category vocabulary.

/// A catalog category. The set is fixed; the admin form offers these as
/// options and the public listing groups by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The category set, in display order.
pub const CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        id: "odf",
        name: "ODF Solutions",
        description: "Optical Distribution Frames for efficient fiber management",
    },
    ProductCategory {
        id: "fiber-cables",
        name: "Fiber Cables",
        description: "High-quality fiber optic cables for various applications",
    },
    ProductCategory {
        id: "accessories",
        name: "Accessories",
        description: "Essential components and tools for fiber optic networks",
    },
    ProductCategory {
        id: "testing-equipment",
        name: "Testing Equipment",
        description: "Professional tools for testing and maintaining fiber optics",
    },
];

/// Look up a category by id.
///
/// `Product::category` values are not validated against the set; an
/// unknown id simply resolves to `None` and renders uncategorized.
pub fn category_by_id(id: &str) -> Option<&'static ProductCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_and_total_over_the_fixed_set() {
        for category in CATEGORIES {
            assert_eq!(category_by_id(category.id), Some(category));
        }
        assert_eq!(category_by_id("ODF"), None);
        assert_eq!(category_by_id("unknown"), None);
    }
}
