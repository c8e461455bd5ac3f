//! Static marketplace dataset used by the `seed-db` binary.

use std::collections::BTreeMap;

use crate::services::schedule::{WeekGrid, WEEKDAYS};

/// (code, display name) of every learning goal.
pub const GOALS: [(&str, &str); 4] = [
    ("travel", "For travel"),
    ("study", "For study"),
    ("work", "For work"),
    ("relocate", "For relocation"),
];

/// Lesson start times every teacher's week is divided into.
pub const SLOT_TIMES: [&str; 8] = [
    "8:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00",
];

pub struct SeedTeacher {
    pub name: &'static str,
    pub about: &'static str,
    pub rating: f64,
    pub picture: &'static str,
    pub price: i32,
    pub goals: &'static [&'static str],
    /// Slots already taken when the marketplace opens.
    pub taken: &'static [(&'static str, &'static str)],
}

impl SeedTeacher {
    /// Full week of slots, minus the pre-taken ones.
    pub fn grid(&self) -> WeekGrid {
        let mut grid = WeekGrid::new();
        for (day, _) in WEEKDAYS {
            let mut slots = BTreeMap::new();
            for time in SLOT_TIMES {
                slots.insert(time.to_string(), true);
            }
            grid.insert(day.to_string(), slots);
        }
        for (day, time) in self.taken {
            if let Some(cell) = grid.get_mut(*day).and_then(|slots| slots.get_mut(*time)) {
                *cell = false;
            }
        }
        grid
    }
}

pub const TEACHERS: [SeedTeacher; 8] = [
    SeedTeacher {
        name: "Abigail Watson",
        about: "Certified CELTA teacher from Manchester. Ten years of \
                conversation-first lessons with adults.",
        rating: 4.9,
        picture: "https://i.pravatar.cc/300?img=11",
        price: 40,
        goals: &["travel", "work"],
        taken: &[("mon", "8:00"), ("wed", "12:00")],
    },
    SeedTeacher {
        name: "Bruno Costa",
        about: "Bilingual engineer turned teacher. Specializes in interview \
                prep and workplace English.",
        rating: 4.7,
        picture: "https://i.pravatar.cc/300?img=12",
        price: 35,
        goals: &["work", "relocate"],
        taken: &[("tue", "18:00")],
    },
    SeedTeacher {
        name: "Chloe Martin",
        about: "IELTS and TOEFL examiner. Structured homework, strict \
                deadlines, visible progress.",
        rating: 4.8,
        picture: "https://i.pravatar.cc/300?img=13",
        price: 45,
        goals: &["study"],
        taken: &[("thu", "10:00"), ("thu", "12:00"), ("sat", "8:00")],
    },
    SeedTeacher {
        name: "Diego Alvarez",
        about: "Backpacker and polyglot. Lessons built around real travel \
                situations: airports, hostels, small talk.",
        rating: 4.3,
        picture: "https://i.pravatar.cc/300?img=14",
        price: 20,
        goals: &["travel"],
        taken: &[],
    },
    SeedTeacher {
        name: "Emma Novak",
        about: "Moved countries twice herself. Helps families settle in: \
                paperwork, school meetings, everyday speech.",
        rating: 4.6,
        picture: "https://i.pravatar.cc/300?img=15",
        price: 30,
        goals: &["relocate", "travel"],
        taken: &[("fri", "16:00")],
    },
    SeedTeacher {
        name: "Felix Schneider",
        about: "Academic writing coach for university applicants. Essays, \
                motivation letters, seminar talks.",
        rating: 4.5,
        picture: "https://i.pravatar.cc/300?img=16",
        price: 38,
        goals: &["study", "work"],
        taken: &[("mon", "20:00"), ("sun", "10:00")],
    },
    SeedTeacher {
        name: "Grace Kim",
        about: "Former flight attendant. Friendly pronunciation drills and \
                phrasebook survival kits for travellers.",
        rating: 4.4,
        picture: "https://i.pravatar.cc/300?img=17",
        price: 25,
        goals: &["travel"],
        taken: &[("wed", "8:00")],
    },
    SeedTeacher {
        name: "Harold Finch",
        about: "Retired professor, patient and methodical. Grammar from the \
                ground up for serious students.",
        rating: 4.2,
        picture: "https://i.pravatar.cc/300?img=18",
        price: 28,
        goals: &["study", "relocate"],
        taken: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::schedule::{decode, encode, is_free};

    #[test]
    fn every_goal_tag_is_a_seeded_goal() {
        for t in &TEACHERS {
            for tag in t.goals {
                assert!(
                    GOALS.iter().any(|(code, _)| code == tag),
                    "teacher {} tagged with unknown goal {}",
                    t.name,
                    tag
                );
            }
        }
    }

    #[test]
    fn grids_round_trip_through_the_codec() {
        for t in &TEACHERS {
            let grid = t.grid();
            assert_eq!(decode(&encode(&grid)).unwrap(), grid);
        }
    }

    #[test]
    fn taken_slots_start_out_not_free() {
        for t in &TEACHERS {
            let grid = t.grid();
            for (day, time) in t.taken {
                assert!(!is_free(&grid, day, time), "{}: {day} {time}", t.name);
            }
        }
        // and a known-free one is free
        assert!(is_free(&TEACHERS[3].grid(), "mon", "8:00"));
    }

    #[test]
    fn grids_cover_the_whole_week() {
        let grid = TEACHERS[0].grid();
        assert_eq!(grid.len(), 7);
        for slots in grid.values() {
            assert_eq!(slots.len(), SLOT_TIMES.len());
        }
    }
}
