//! Static dropdown data served verbatim by the catalog endpoints.

pub const BUSINESS_TYPES: &[&str] = &[
    "eCommerce Store",
    "SaaS Company",
    "Coaching Business",
    "Local Business",
    "Real Estate Agency",
    "Healthcare Practice",
    "Restaurant/Food Service",
    "Fitness/Gym",
    "Beauty/Salon",
    "Consulting Firm",
    "Law Firm",
    "Accounting Firm",
    "Digital Marketing Agency",
    "Construction Company",
    "Manufacturing Business",
    "Retail Store",
    "Online Course Creator",
    "Freelance Service Provider",
    "Tech Startup",
    "Financial Services",
];

pub const SERVICES: &[&str] = &[
    "Web Development",
    "Mobile App Development",
    "UI/UX Design",
    "Graphic Design",
    "Digital Marketing",
    "SEO Services",
    "Content Writing",
    "Copywriting",
    "Email Marketing",
    "Social Media Management",
    "PPC Advertising",
    "Video Production",
    "Photography",
    "Branding & Logo Design",
    "WordPress Development",
    "E-commerce Development",
    "Data Analytics",
    "Virtual Assistant Services",
    "Lead Generation",
    "Sales Funnel Creation",
    "Conversion Rate Optimization",
    "Marketing Automation",
    "Business Consulting",
    "Project Management",
];

pub const TONES: &[&str] = &[
    "Professional",
    "Friendly",
    "Casual",
    "Formal",
    "Conversational",
    "Confident",
    "Helpful",
    "Direct",
];
