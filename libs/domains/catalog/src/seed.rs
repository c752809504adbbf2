//! Curated sample catalog used to populate an empty store

use crate::models::Product;

/// Sample Karachi wardrobe staples used by the seed operation
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: None,
            title: "Embroidered Lawn Suit - Karachi Breeze".to_string(),
            description: "3-piece unstitched lawn with chiffon dupatta, floral threadwork inspired by Clifton sunsets.".to_string(),
            price: 39.99,
            category: "Women".to_string(),
            in_stock: true,
            image: Some("https://images.unsplash.com/photo-1593030253490-1540f48f5c3b?q=80&w=1200&auto=format&fit=crop".to_string()),
        },
        Product {
            id: None,
            title: "Men's Kurta - Old City Olive".to_string(),
            description: "Classic cotton kurta with band collar, comfortable for humid Karachi evenings.".to_string(),
            price: 24.99,
            category: "Men".to_string(),
            in_stock: true,
            image: Some("https://images.unsplash.com/photo-1542060748-10c28b62716a?q=80&w=1200&auto=format&fit=crop".to_string()),
        },
        Product {
            id: None,
            title: "Festive Shalwar Kameez - Eid Edition".to_string(),
            description: "Rich jacquard fabric with subtle zari, perfect for festive dinners at Burns Road.".to_string(),
            price: 59.0,
            category: "Women".to_string(),
            in_stock: true,
            image: Some("https://images.unsplash.com/photo-1596421250711-9ec0ef9a3e6a?q=80&w=1200&auto=format&fit=crop".to_string()),
        },
        Product {
            id: None,
            title: "Casual Kurti - Sea View Sky".to_string(),
            description: "Breathable cotton kurti with pastel palette inspired by Sea View mornings.".to_string(),
            price: 19.99,
            category: "Women".to_string(),
            in_stock: true,
            image: Some("https://images.unsplash.com/photo-1616596875243-8c7e89e1a3fd?q=80&w=1200&auto=format&fit=crop".to_string()),
        },
        Product {
            id: None,
            title: "Men's Waistcoat - Saddar Slate".to_string(),
            description: "Versatile waistcoat to elevate any kurta look.".to_string(),
            price: 34.5,
            category: "Men".to_string(),
            in_stock: true,
            image: Some("https://images.unsplash.com/photo-1544006659-f0b21884ce1d?q=80&w=1200&auto=format&fit=crop".to_string()),
        },
        Product {
            id: None,
            title: "Kids Shalwar Kameez - Mini Maroon".to_string(),
            description: "Soft cotton blend, easy-care for the little ones.".to_string(),
            price: 14.99,
            category: "Kids".to_string(),
            in_stock: true,
            image: Some("https://images.unsplash.com/photo-1621784563330-dfd31e50f58e?q=80&w=1200&auto=format&fit=crop".to_string()),
        },
    ]
}
