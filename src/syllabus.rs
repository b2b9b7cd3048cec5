// src/syllabus.rs

/// Syllabus topics per position and block, as published in the exam notice.
pub struct RoleSyllabus {
    pub role: &'static str,
    pub blocks: &'static [Block],
}

pub struct Block {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

static SYLLABUS: &[RoleSyllabus] = &[
    RoleSyllabus {
        role: "Nurse",
        blocks: &[
            Block {
                name: "Health",
                topics: &[
                    "SUS principles and guidelines",
                    "Law 8.080/90",
                    "Law 8.142/90",
                    "Primary health care",
                    "Epidemiological surveillance",
                ],
            },
            Block {
                name: "Nursing",
                topics: &[
                    "Nursing process",
                    "Patient safety",
                    "Infection control",
                    "Medication administration",
                ],
            },
        ],
    },
    RoleSyllabus {
        role: "Physician",
        blocks: &[Block {
            name: "Health",
            topics: &[
                "SUS principles and guidelines",
                "Law 8.080/90",
                "Medical ethics code",
                "Notifiable diseases",
            ],
        }],
    },
    RoleSyllabus {
        role: "Administrative Analyst",
        blocks: &[
            Block {
                name: "Administration",
                topics: &[
                    "Public administration principles",
                    "Law 14.133/21 procurement",
                    "Administrative acts",
                    "Budget and finance",
                ],
            },
            Block {
                name: "Law",
                topics: &[
                    "Constitutional law",
                    "Administrative law",
                    "Law 8.112/90",
                ],
            },
        ],
    },
];

/// Topics for `role` within `block`, if both exist.
pub fn topics(role: &str, block: &str) -> Option<&'static [&'static str]> {
    SYLLABUS
        .iter()
        .find(|r| r.role == role)?
        .blocks
        .iter()
        .find(|b| b.name == block)
        .map(|b| b.topics)
        .filter(|topics| !topics.is_empty())
}

pub fn roles() -> &'static [RoleSyllabus] {
    SYLLABUS
}

pub fn role_count() -> usize {
    SYLLABUS.len()
}
