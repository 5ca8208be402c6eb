#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hackathon {
  pub id: &'static str,
  pub name: &'static str,
  pub dates: &'static str,
  pub tagline: &'static str,
}

pub const RIDE_HACK_ID: &str = "ridehack2025";

pub static HACKATHONS: [Hackathon; 4] = [
  Hackathon {
    id: "techfest2024",
    name: "TechFest 2024",
    dates: "March 15-17",
    tagline: "48 hours of building with AI, web3 and cloud tracks",
  },
  Hackathon {
    id: "startup2024",
    name: "StartupWeekend",
    dates: "April 5-7",
    tagline: "From idea to pitch deck in one weekend",
  },
  Hackathon {
    id: "greentech2024",
    name: "GreenTech Challenge",
    dates: "May 10-12",
    tagline: "Sustainability hacks for campus and city",
  },
  Hackathon {
    id: RIDE_HACK_ID,
    name: "Ride Hack 2025",
    dates: "Mobility week",
    tagline: "Rethink how the campus moves",
  },
];

pub fn find(id: &str) -> Option<&'static Hackathon> {
  HACKATHONS.iter().find(|hackathon| hackathon.id == id)
}

pub fn display_name(id: &str) -> &'static str {
  find(id).map(|hackathon| hackathon.name).unwrap_or("Hackathon")
}

pub fn registration_title(id: &str) -> String {
  format!("Register for {}", display_name(id))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn titles_known_hackathons() {
    assert_eq!(registration_title("startup2024"), "Register for StartupWeekend");
  }

  #[test]
  fn falls_back_for_unknown_ids() {
    assert_eq!(registration_title("mystery"), "Register for Hackathon");
    assert_eq!(display_name(""), "Hackathon");
  }
}
