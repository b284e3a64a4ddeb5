/// One entry per certificate holder. Extend here before a batch run.
pub struct Member {
    pub name: &'static str,
    pub team: &'static str,
}

pub const ROSTER: &[Member] = &[
    Member {
        name: "Aarav Mehta",
        team: "Organizer",
    },
    Member {
        name: "Lena Okafor",
        team: "Co-organizer",
    },
    Member {
        name: "Priya Raghavan",
        team: "Head, Event Management Team",
    },
    Member {
        name: "Daniel Cho",
        team: "Head, Event Management Team",
    },
    Member {
        name: "Mateo Alvarez",
        team: "Head, Event Management Team",
    },
    Member {
        name: "Sofia Petrova",
        team: "Head, Media & Communication Team",
    },
    Member {
        name: "Fatima El-Sayed",
        team: "Head, Media & Communication Team",
    },
    Member {
        name: "Ibrahim Khan",
        team: "Head, Outreach & Partnership Team",
    },
    Member {
        name: "Grace Liu",
        team: "Head, Creative & Content Team",
    },
    Member {
        name: "Tomas Keller",
        team: "Head, Creative & Content Team",
    },
    Member {
        name: "Ananya Deshpande",
        team: "Head, Technical & Academics Team",
    },
    Member {
        name: "Noah Williams",
        team: "Head, Technical & Academics Team",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::utils::slugify;

    use super::ROSTER;

    #[test]
    fn test_roster_is_populated() {
        assert!(!ROSTER.is_empty());

        for member in ROSTER {
            assert!(!member.name.trim().is_empty());
            assert!(!member.team.trim().is_empty());
        }
    }

    // Slugs name the QR files, a collision would overwrite another member's code.
    #[test]
    fn test_slugs_do_not_collide() {
        let slugs: HashSet<String> = ROSTER.iter().map(|m| slugify(m.name)).collect();

        assert_eq!(slugs.len(), ROSTER.len());
    }
}
