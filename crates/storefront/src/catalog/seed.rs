use crate::model::{Category, Product};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
    category: Category,
    featured: bool,
    stock: u32,
}

const SEED: [SeedProduct; 12] = [
    SeedProduct {
        id: "1",
        name: "Royal Rajasthani Invitation",
        description: "Luxurious invitation featuring intricate paisley patterns and gold foil detailing. Perfect for a grand Indian wedding celebration with traditional Rajasthani motifs.",
        price: 6.99,
        image: "/royal-red-gold-indian-wedding-invitation-paisley-p.jpg",
        category: Category::Invitation,
        featured: true,
        stock: 500,
    },
    SeedProduct {
        id: "2",
        name: "Marigold Mandala Suite",
        description: "Vibrant orange and yellow invitation with beautiful mandala designs. Includes matching RSVP card and envelope with marigold flower motifs.",
        price: 7.99,
        image: "/orange-marigold-mandala-indian-wedding-invitation.jpg",
        category: Category::Invitation,
        featured: true,
        stock: 350,
    },
    SeedProduct {
        id: "3",
        name: "Peacock Elegance Invitation",
        description: "Stunning peacock-themed invitation with emerald green and royal blue accents. Features traditional peacock feather patterns and gold embossing.",
        price: 8.49,
        image: "/peacock-green-blue-gold-indian-wedding-invitation.jpg",
        category: Category::Invitation,
        featured: true,
        stock: 420,
    },
    SeedProduct {
        id: "4",
        name: "Ganesh Blessings Suite",
        description: "Traditional invitation featuring Lord Ganesh with intricate border designs. Deep red and gold color scheme for an auspicious beginning.",
        price: 7.49,
        image: "/ganesh-red-gold-traditional-indian-wedding-invitat.jpg",
        category: Category::Invitation,
        featured: false,
        stock: 300,
    },
    SeedProduct {
        id: "5",
        name: "Lotus Bloom Save the Date",
        description: "Elegant save the date card featuring sacred lotus flowers with pink and gold accents. Perfect for announcing your special day.",
        price: 3.99,
        image: "/lotus-pink-gold-indian-wedding-save-the-date.jpg",
        category: Category::SaveTheDate,
        featured: true,
        stock: 600,
    },
    SeedProduct {
        id: "6",
        name: "Mehndi Design Save the Date",
        description: "Beautiful henna-inspired patterns in rich brown and gold. Traditional mehndi art celebrating Indian wedding customs.",
        price: 3.49,
        image: "/mehndi-henna-brown-gold-indian-wedding-save-the-da.jpg",
        category: Category::SaveTheDate,
        featured: false,
        stock: 450,
    },
    SeedProduct {
        id: "7",
        name: "Namaste Thank You Cards",
        description: "Express gratitude with these beautifully designed thank you cards featuring traditional namaste gesture and floral borders.",
        price: 2.99,
        image: "/namaste-thank-you-indian-wedding-card-floral.jpg",
        category: Category::ThankYou,
        featured: false,
        stock: 800,
    },
    SeedProduct {
        id: "8",
        name: "Rangoli RSVP Cards",
        description: "Colorful RSVP cards inspired by traditional rangoli designs. Vibrant patterns in multiple colors for a festive touch.",
        price: 2.49,
        image: "/rangoli-colorful-indian-wedding-rsvp-card.jpg",
        category: Category::Rsvp,
        featured: false,
        stock: 700,
    },
    SeedProduct {
        id: "9",
        name: "Royal Feast Menu Card",
        description: "Luxurious menu cards with gold foil and traditional Indian motifs. Perfect for displaying your wedding feast offerings.",
        price: 4.49,
        image: "/gold-red-royal-indian-wedding-menu-card.jpg",
        category: Category::Menu,
        featured: false,
        stock: 400,
    },
    SeedProduct {
        id: "10",
        name: "Baraat Ceremony Program",
        description: "Detailed ceremony program featuring traditional Indian wedding rituals. Includes timeline and explanations of each ceremony.",
        price: 3.49,
        image: "/baraat-ceremony-indian-wedding-program-traditional.jpg",
        category: Category::Program,
        featured: false,
        stock: 500,
    },
    SeedProduct {
        id: "11",
        name: "Diya & Flowers Invitation",
        description: "Warm invitation featuring traditional diyas (oil lamps) and marigold flowers. Symbolizes light and prosperity for your union.",
        price: 6.49,
        image: "/diya-lamp-marigold-flowers-indian-wedding-invitati.jpg",
        category: Category::Invitation,
        featured: false,
        stock: 380,
    },
    SeedProduct {
        id: "12",
        name: "Sangeet Night Invitation",
        description: "Vibrant and festive invitation specifically for sangeet ceremony. Features musical instruments and dancing motifs in bright colors.",
        price: 5.99,
        image: "/sangeet-music-dance-colorful-indian-wedding-invita.jpg",
        category: Category::Invitation,
        featured: false,
        stock: 320,
    },
];

/// The built-in catalog served while no admin override is stored.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            price: seed.price,
            image: seed.image.to_string(),
            category: seed.category,
            featured: seed.featured,
            customizable: true,
            stock: seed.stock,
        })
        .collect()
}
