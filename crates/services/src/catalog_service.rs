use prep_core::model::{SetId, SetKind, SetRef};

/// Difficulty badge shown on a question set card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Mixed => "Mixed",
        }
    }

    /// Badge classes for the listing card.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "badge badge--beginner",
            Difficulty::Intermediate => "badge badge--intermediate",
            Difficulty::Advanced => "badge badge--advanced",
            Difficulty::Mixed => "badge badge--mixed",
        }
    }
}

/// Listing entry for a practice question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSetInfo {
    pub id: SetId,
    pub questions: u32,
    pub difficulty: Difficulty,
    pub topics: &'static str,
    pub estimated_minutes: u32,
}

impl QuestionSetInfo {
    #[must_use]
    pub fn set_ref(&self) -> SetRef {
        SetRef {
            kind: SetKind::QuestionSet,
            id: self.id,
        }
    }
}

/// Listing entry for a learning module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: SetId,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: u32,
}

impl ModuleInfo {
    #[must_use]
    pub fn set_ref(&self) -> SetRef {
        SetRef {
            kind: SetKind::Module,
            id: self.id,
        }
    }
}

const fn set(id: u64, difficulty: Difficulty, topics: &'static str) -> QuestionSetInfo {
    QuestionSetInfo {
        id: SetId::new(id),
        questions: 100,
        difficulty,
        topics,
        estimated_minutes: 150,
    }
}

const fn module(
    id: u64,
    title: &'static str,
    description: &'static str,
    questions: u32,
) -> ModuleInfo {
    ModuleInfo {
        id: SetId::new(id),
        title,
        description,
        questions,
    }
}

const QUESTION_SETS: [QuestionSetInfo; 11] = [
    set(1, Difficulty::Beginner, "Cloud Concepts, Basic Services"),
    set(2, Difficulty::Intermediate, "Security, Compliance"),
    set(3, Difficulty::Intermediate, "Core Services, Architecture"),
    set(4, Difficulty::Advanced, "Cost Optimization, Billing"),
    set(5, Difficulty::Beginner, "Compute Services"),
    set(6, Difficulty::Intermediate, "Storage, Database"),
    set(7, Difficulty::Advanced, "Networking, Content Delivery"),
    set(8, Difficulty::Intermediate, "Management, Monitoring"),
    set(9, Difficulty::Advanced, "Security Best Practices"),
    set(10, Difficulty::Intermediate, "Migration, Hybrid Cloud"),
    set(11, Difficulty::Mixed, "Remaining Topics, Review"),
];

const MODULES: [ModuleInfo; 11] = [
    module(1, "Cloud Concepts", "Introduction to cloud computing and AWS fundamentals", 30),
    module(
        2,
        "Cloud Economics and Billing",
        "AWS pricing models and cost optimization strategies",
        32,
    ),
    module(3, "AWS Global Infrastructure", "Regions, Availability Zones, and global services", 34),
    module(4, "AWS Cloud Security", "Security model, IAM, and compliance frameworks", 40),
    module(5, "Networking and Content Delivery", "VPC, CloudFront, and networking concepts", 30),
    module(6, "Compute", "EC2, Lambda, and other compute services", 47),
    module(7, "Storage", "S3, EBS, and AWS storage solutions", 35),
    module(8, "Databases", "RDS, DynamoDB, and database options", 30),
    module(9, "Cloud Architecture", "Well-Architected Framework and best practices", 20),
    module(
        10,
        "Auto Scaling and Monitoring",
        "CloudWatch, Auto Scaling, and monitoring services",
        20,
    ),
    module(11, "Mock Exam", "Full-length practice exam simulation", 65),
];

/// Static catalog of the question sets and modules the app ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn question_sets(&self) -> &'static [QuestionSetInfo] {
        &QUESTION_SETS
    }

    #[must_use]
    pub fn modules(&self) -> &'static [ModuleInfo] {
        &MODULES
    }

    /// Every quiz the catalog links to, question sets first.
    #[must_use]
    pub fn all_refs(&self) -> Vec<SetRef> {
        QUESTION_SETS
            .iter()
            .map(QuestionSetInfo::set_ref)
            .chain(MODULES.iter().map(ModuleInfo::set_ref))
            .collect()
    }

    /// Heading for a quiz page, e.g. "Module 3: AWS Global Infrastructure".
    #[must_use]
    pub fn title_for(&self, set: SetRef) -> String {
        match set.kind {
            SetKind::Module => MODULES
                .iter()
                .find(|m| m.id == set.id)
                .map_or_else(|| set.to_string(), |m| format!("Module {}: {}", m.id, m.title)),
            SetKind::QuestionSet => set.to_string(),
        }
    }
}
