//! Hard-coded demo content shown by the tablet panels.
//!
//! Nothing here is persisted or fetched; the panels render these tables as-is.

#[derive(Debug, Clone, Copy)]
pub struct CitizenProfile {
    pub full_name: &'static str,
    pub age: u32,
    pub citizenship: &'static str,
    pub citizen_id: &'static str,
    pub birth_date: &'static str,
    pub status: &'static str,
}

pub const PROFILE: CitizenProfile = CitizenProfile {
    full_name: "John Anderson",
    age: 28,
    citizenship: "San Andreas",
    citizen_id: "#SA-2024-1337",
    birth_date: "15 March 1996",
    status: "Active citizen",
};

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u32,
    pub max_level: u32,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Driving", level: 7, max_level: 10 },
    Skill { name: "First aid", level: 5, max_level: 10 },
    Skill { name: "Mechanics", level: 2, max_level: 10 },
    Skill { name: "Negotiation", level: 4, max_level: 10 },
];

pub const SKILL_POINTS_AVAILABLE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademyStatus {
    Licensed,
    InProgress,
    NotStarted,
}

#[derive(Debug, Clone, Copy)]
pub struct AcademyRecord {
    pub name: &'static str,
    pub status: AcademyStatus,
    pub progress: u8,
    pub badges: &'static [&'static str],
}

pub const ACADEMIES: &[AcademyRecord] = &[
    AcademyRecord {
        name: "Medical Academy",
        status: AcademyStatus::Licensed,
        progress: 100,
        badges: &["Paramedic Badge", "Life Saver"],
    },
    AcademyRecord {
        name: "Police Academy",
        status: AcademyStatus::InProgress,
        progress: 60,
        badges: &[],
    },
    AcademyRecord {
        name: "Mechanics Academy",
        status: AcademyStatus::NotStarted,
        progress: 0,
        badges: &[],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct BankAccount {
    pub available: i64,
    pub blocked: i64,
    pub annual_interest_pct: f32,
    pub monthly_gain: i64,
    pub iban: &'static str,
}

pub const BANK_ACCOUNT: BankAccount = BankAccount {
    available: 24_750,
    blocked: 0,
    annual_interest_pct: 2.5,
    monthly_gain: 17,
    iban: "SA29 ANOB 1337 2024 0001",
};

#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    pub id: &'static str,
    pub description: &'static str,
    /// Signed: income is positive, expenses negative.
    pub amount: i64,
    pub date: &'static str,
    pub category: &'static str,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > 0
    }
}

pub const TRANSACTIONS: &[Transaction] = &[
    Transaction { id: "1", description: "EMS salary", amount: 1200, date: "Today, 14:30", category: "Salary" },
    Transaction { id: "2", description: "Property tax", amount: -450, date: "Yesterday, 09:15", category: "Taxes" },
    Transaction { id: "3", description: "Car insurance", amount: -120, date: "Yesterday, 08:00", category: "Insurance" },
    Transaction { id: "4", description: "Transfer from Alex M.", amount: 500, date: "2 days ago", category: "Transfer" },
    Transaction { id: "5", description: "Parking fine", amount: -75, date: "3 days ago", category: "Fines" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillKind {
    Property,
    Vehicle,
    Fine,
}

#[derive(Debug, Clone, Copy)]
pub struct Bill {
    pub id: &'static str,
    pub kind: BillKind,
    pub description: &'static str,
    pub amount: i64,
    pub due: &'static str,
}

pub const PENDING_BILLS: &[Bill] = &[
    Bill { id: "1", kind: BillKind::Property, description: "Annual apartment tax", amount: 2400, due: "30 Jan 2024" },
    Bill { id: "2", kind: BillKind::Vehicle, description: "Vapid Dominator insurance", amount: 180, due: "5 Feb 2024" },
    Bill { id: "3", kind: BillKind::Fine, description: "Speeding fine", amount: 150, due: "Overdue" },
];

/// (income, expenses) over a transaction list; expenses are reported positive.
pub fn transaction_totals(txs: &[Transaction]) -> (i64, i64) {
    txs.iter().fold((0, 0), |(inc, exp), tx| {
        if tx.is_income() {
            (inc + tx.amount, exp)
        } else {
            (inc, exp - tx.amount)
        }
    })
}

pub fn bills_total(bills: &[Bill]) -> i64 {
    bills.iter().map(|b| b.amount).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Garage,
    Impounded,
    Street,
}

impl VehicleStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Garage => "In garage",
            Self::Impounded => "Impounded",
            Self::Street => "On the street",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Vehicle {
    pub id: &'static str,
    pub model: &'static str,
    pub plate: &'static str,
    pub status: VehicleStatus,
    pub location: &'static str,
    pub condition: &'static str,
    pub fuel: u8,
    pub mileage: &'static str,
    pub insured: bool,
    pub impound_fee: i64,
}

pub const VEHICLES: &[Vehicle] = &[
    Vehicle {
        id: "1",
        model: "Vapid Dominator",
        plate: "SPEED01",
        status: VehicleStatus::Garage,
        location: "Personal garage",
        condition: "Excellent",
        fuel: 85,
        mileage: "12,450 km",
        insured: true,
        impound_fee: 0,
    },
    Vehicle {
        id: "2",
        model: "Pegassi Zentorno",
        plate: "FAST99",
        status: VehicleStatus::Impounded,
        location: "LSPD impound lot",
        condition: "Good",
        fuel: 45,
        mileage: "8,230 km",
        insured: true,
        impound_fee: 500,
    },
    Vehicle {
        id: "3",
        model: "Bravado Buffalo",
        plate: "WORK01",
        status: VehicleStatus::Street,
        location: "Mall parking",
        condition: "Fair",
        fuel: 60,
        mileage: "25,100 km",
        insured: false,
        impound_fee: 0,
    },
];

pub fn count_vehicles(vehicles: &[Vehicle], status: VehicleStatus) -> usize {
    vehicles.iter().filter(|v| v.status == status).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxStatus {
    Paid,
    Due,
}

#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub kind: &'static str,
    pub value: i64,
    pub tax_status: TaxStatus,
    pub next_tax_due: &'static str,
    pub tax_amount: i64,
    pub access_list: &'static [&'static str],
    pub amenities: &'static [&'static str],
}

pub const PROPERTIES: &[Property] = &[
    Property {
        id: "1",
        name: "Luxury apartment",
        address: "Eclipse Towers, Apt 31",
        kind: "Apartment",
        value: 450_000,
        tax_status: TaxStatus::Paid,
        next_tax_due: "15 Dec 2024",
        tax_amount: 2400,
        access_list: &["Maria Popescu", "Alex Ionescu"],
        amenities: &["Parking", "Pool", "Gym", "Concierge"],
    },
    Property {
        id: "2",
        name: "Family house",
        address: "Vinewood Hills, 1247",
        kind: "House",
        value: 680_000,
        tax_status: TaxStatus::Due,
        next_tax_due: "Overdue",
        tax_amount: 3600,
        access_list: &["Ana Georgescu"],
        amenities: &["Garden", "Double garage", "Pool", "Terrace"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FurniturePackage {
    pub name: &'static str,
    pub price: i64,
    pub items: &'static str,
}

pub const FURNITURE_PACKAGES: &[FurniturePackage] = &[
    FurniturePackage { name: "Modern living room", price: 2500, items: "Sofa, table, TV, decorations" },
    FurniturePackage { name: "Luxury bedroom", price: 1800, items: "Bed, wardrobe, nightstands, mirror" },
    FurniturePackage { name: "Complete kitchen", price: 3200, items: "Furniture, appliances, utensils" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingCategory {
    #[default]
    Vehicles,
    Properties,
    Items,
    Services,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 4] = [Self::Vehicles, Self::Properties, Self::Items, Self::Services];

    pub fn label(self) -> &'static str {
        match self {
            Self::Vehicles => "Vehicles",
            Self::Properties => "Properties",
            Self::Items => "Misc",
            Self::Services => "Services",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub id: &'static str,
    pub category: ListingCategory,
    pub title: &'static str,
    pub price: i64,
    pub seller: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub images: u32,
    pub posted: &'static str,
    pub condition: &'static str,
}

pub const LISTINGS: &[Listing] = &[
    Listing {
        id: "v1",
        category: ListingCategory::Vehicles,
        title: "Vapid Dominator GT",
        price: 85_000,
        seller: "Alex M.",
        location: "Los Santos",
        description: "Perfect condition, fully modified, new tyres.",
        images: 3,
        posted: "2 hours ago",
        condition: "Excellent",
    },
    Listing {
        id: "v2",
        category: ListingCategory::Vehicles,
        title: "Pegassi Zentorno",
        price: 120_000,
        seller: "Maria P.",
        location: "Vinewood",
        description: "Luxury supercar, private garage, full service history.",
        images: 5,
        posted: "1 day ago",
        condition: "Very good",
    },
    Listing {
        id: "p1",
        category: ListingCategory::Properties,
        title: "Eclipse Towers apartment",
        price: 450_000,
        seller: "John D.",
        location: "Downtown LS",
        description: "Luxury apartment with ocean view, fully furnished.",
        images: 8,
        posted: "3 hours ago",
        condition: "New",
    },
    Listing {
        id: "i1",
        category: ListingCategory::Items,
        title: "Professional tool set",
        price: 2500,
        seller: "Mechanic Pro",
        location: "Sandy Shores",
        description: "Complete mechanic tool set, premium quality.",
        images: 2,
        posted: "5 hours ago",
        condition: "Good",
    },
    Listing {
        id: "s1",
        category: ListingCategory::Services,
        title: "Private driver",
        price: 50,
        seller: "Taxi Express",
        location: "All of LS",
        description: "Fast and safe transport, available 24/7.",
        images: 1,
        posted: "1 hour ago",
        condition: "Active",
    },
    Listing {
        id: "s2",
        category: ListingCategory::Services,
        title: "Criminal defence lawyer",
        price: 200,
        seller: "Law Firm LS",
        location: "Downtown",
        description: "Legal advice and court representation, criminal cases.",
        images: 0,
        posted: "4 hours ago",
        condition: "Available",
    },
];

pub fn listings_in(category: ListingCategory) -> impl Iterator<Item = &'static Listing> {
    LISTINGS.iter().filter(move |l| l.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
    Busy,
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub id: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
    pub presence: Presence,
}

pub const CONTACTS: &[Contact] = &[
    Contact { id: "contact1", name: "Alex Ionescu", phone: "555-0123", presence: Presence::Online },
    Contact { id: "contact2", name: "Maria Popescu", phone: "555-0456", presence: Presence::Offline },
    Contact { id: "contact3", name: "John Smith", phone: "555-0789", presence: Presence::Busy },
    Contact { id: "contact4", name: "Ana Georgescu", phone: "555-0321", presence: Presence::Online },
];

#[derive(Debug, Clone, Copy)]
pub struct ChatMessage {
    pub contact_id: &'static str,
    pub from_me: bool,
    pub text: &'static str,
    pub time: &'static str,
}

pub const MESSAGES: &[ChatMessage] = &[
    ChatMessage { contact_id: "contact1", from_me: false, text: "Hi! How is the new car?", time: "14:30" },
    ChatMessage { contact_id: "contact1", from_me: true, text: "Great! Thanks for the recommendation.", time: "14:32" },
    ChatMessage { contact_id: "contact1", from_me: false, text: "Anytime! Tell me if you need anything.", time: "14:35" },
    ChatMessage { contact_id: "contact2", from_me: false, text: "Hey! Are you free for an EMS call?", time: "13:15" },
    ChatMessage { contact_id: "contact2", from_me: true, text: "Yes, I'm on duty. Where is it?", time: "13:16" },
];

pub fn conversation(contact_id: &str) -> impl Iterator<Item = &'static ChatMessage> + '_ {
    MESSAGES.iter().filter(move |m| m.contact_id == contact_id)
}

#[derive(Debug, Clone, Copy)]
pub struct SocialPost {
    pub author: &'static str,
    pub content: &'static str,
    pub time: &'static str,
    pub likes: u32,
    pub comments: u32,
}

pub const SOCIAL_POSTS: &[SocialPost] = &[
    SocialPost {
        author: "Alex M.",
        content: "Beautiful day in Los Santos! Perfect for a drive.",
        time: "2 hours ago",
        likes: 15,
        comments: 3,
    },
    SocialPost {
        author: "Maria P.",
        content: "EMS is hiring paramedics! Apply on the government tablet.",
        time: "4 hours ago",
        likes: 8,
        comments: 1,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Tutorial {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: &'static str,
    pub modules: &'static [&'static str],
    /// Completion percentage for the demo player.
    pub progress: u8,
}

pub const TUTORIALS: &[Tutorial] = &[
    Tutorial {
        id: "basics",
        title: "Basics",
        description: "Learn the server fundamentals",
        duration: "15 min",
        difficulty: "Beginner",
        modules: &[
            "Creating your character",
            "The game interface",
            "Essential commands",
            "The inventory system",
            "Interacting with NPCs",
        ],
        progress: 100,
    },
    Tutorial {
        id: "jobs",
        title: "The job system",
        description: "Complete career guide",
        duration: "25 min",
        difficulty: "Intermediate",
        modules: &[
            "Choosing a career",
            "The application process",
            "Progressing in a job",
            "Benefits and rewards",
            "Changing jobs",
        ],
        progress: 75,
    },
    Tutorial {
        id: "laws",
        title: "Penal code",
        description: "The laws of San Andreas",
        duration: "30 min",
        difficulty: "Intermediate",
        modules: &[
            "Minor offences",
            "Serious offences",
            "Legal procedures",
            "Rights and obligations",
            "The justice system",
        ],
        progress: 50,
    },
    Tutorial {
        id: "roleplay",
        title: "Roleplay guide",
        description: "Techniques for quality RP",
        duration: "20 min",
        difficulty: "Advanced",
        modules: &[
            "Developing your character",
            "Realistic interactions",
            "Handling conflict",
            "Complex scenarios",
            "RP etiquette",
        ],
        progress: 25,
    },
    Tutorial {
        id: "advanced",
        title: "Advanced systems",
        description: "Complex server features",
        duration: "35 min",
        difficulty: "Expert",
        modules: &[
            "The economy",
            "Properties and investments",
            "Organisations and factions",
            "Special events",
            "Changes and updates",
        ],
        progress: 0,
    },
];

pub fn average_progress(tutorials: &[Tutorial]) -> u8 {
    if tutorials.is_empty() {
        return 0;
    }
    let sum: u32 = tutorials.iter().map(|t| u32::from(t.progress)).sum();
    (sum / tutorials.len() as u32) as u8
}

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "How do I pick my first job?",
        answer: "Open the job centre from the tablet and explore the options. Civilian jobs are a good start to learn the systems.",
    },
    FaqItem {
        question: "What do I do about technical problems?",
        answer: "Use /report in game or contact staff through the Discord ticket system.",
    },
    FaqItem {
        question: "How can I earn money fast?",
        answer: "Focus on your main job, complete the daily quests and join the special events organised by staff.",
    },
    FaqItem {
        question: "Can I change jobs at any time?",
        answer: "Yes, with a 24 hour cooldown between changes. Some whitelisted jobs require an application.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Applied,
    NotEligible,
}

#[derive(Debug, Clone, Copy)]
pub struct JobPosition {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub description: &'static str,
    pub required_academy: &'static str,
    pub min_age: u32,
    pub clean_record: bool,
    pub eligibility: Eligibility,
}

pub const POSITIONS: &[JobPosition] = &[
    JobPosition {
        id: "lspd",
        name: "Los Santos Police Department",
        department: "LSPD",
        description: "Keeps order and safety in Los Santos",
        required_academy: "Police Academy graduate",
        min_age: 21,
        clean_record: true,
        eligibility: Eligibility::Eligible,
    },
    JobPosition {
        id: "ems",
        name: "Emergency Medical Service",
        department: "EMS",
        description: "Saves lives and provides emergency care",
        required_academy: "Medical Academy graduate",
        min_age: 18,
        clean_record: true,
        eligibility: Eligibility::Applied,
    },
    JobPosition {
        id: "mechanic",
        name: "Mechanic Service",
        department: "Mechanic",
        description: "Repairs and maintains the city's vehicles",
        required_academy: "Mechanics Academy graduate",
        min_age: 18,
        clean_record: false,
        eligibility: Eligibility::NotEligible,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    UnderReview,
    InterviewScheduled,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::UnderReview => "Under review",
            Self::InterviewScheduled => "Interview scheduled",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JobApplication {
    pub id: &'static str,
    pub position: &'static str,
    pub department: &'static str,
    pub status: ApplicationStatus,
    pub applied: &'static str,
    pub interview: Option<&'static str>,
    pub notes: &'static str,
}

pub const APPLICATIONS: &[JobApplication] = &[
    JobApplication {
        id: "ems-001",
        position: "EMS Paramedic",
        department: "EMS",
        status: ApplicationStatus::InterviewScheduled,
        applied: "2024-01-15",
        interview: Some("2024-01-20 14:00"),
        notes: "Interview booked with Dr. Johnson",
    },
    JobApplication {
        id: "lspd-002",
        position: "Police Officer",
        department: "LSPD",
        status: ApplicationStatus::UnderReview,
        applied: "2024-01-10",
        interview: None,
        notes: "Application is being evaluated",
    },
];

/// Player status shown on the always-on HUD.
#[derive(Debug, Clone, Copy)]
pub struct PlayerStatus {
    pub health_pct: u8,
    pub armor_pct: u8,
    pub cash: i64,
}

pub const PLAYER_STATUS: PlayerStatus = PlayerStatus {
    health_pct: 100,
    armor_pct: 85,
    cash: 12_450,
};

/// `12450` → `"$12,450"`, negatives as `"-$75"`.
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if amount < 0 {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garage_counts_by_status() {
        assert_eq!(count_vehicles(VEHICLES, VehicleStatus::Garage), 1);
        assert_eq!(count_vehicles(VEHICLES, VehicleStatus::Impounded), 1);
        assert_eq!(count_vehicles(VEHICLES, VehicleStatus::Street), 1);
    }

    #[test]
    fn bank_totals() {
        assert_eq!(transaction_totals(TRANSACTIONS), (1700, 645));
        assert_eq!(bills_total(PENDING_BILLS), 2730);
    }

    #[test]
    fn listings_are_grouped_by_category() {
        assert_eq!(listings_in(ListingCategory::Vehicles).count(), 2);
        assert_eq!(listings_in(ListingCategory::Properties).count(), 1);
        assert_eq!(listings_in(ListingCategory::Items).count(), 1);
        assert_eq!(listings_in(ListingCategory::Services).count(), 2);
    }

    #[test]
    fn conversations_follow_contact() {
        assert_eq!(conversation("contact1").count(), 3);
        assert_eq!(conversation("contact3").count(), 0);
    }

    #[test]
    fn tutorial_progress_average() {
        assert_eq!(average_progress(TUTORIALS), 50);
        assert_eq!(average_progress(&[]), 0);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(950), "$950");
        assert_eq!(format_money(12_450), "$12,450");
        assert_eq!(format_money(-75), "-$75");
        assert_eq!(format_money(1_200_000), "$1,200,000");
    }
}
