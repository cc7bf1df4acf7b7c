use super::{Activity, Catalog};

/// The Mergington High School catalog the server starts with when no seed
/// file is configured.
pub fn mergington_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Soccer Club",
        Activity::new(
            "Practice soccer skills and play friendly matches",
            "Tuesdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
    );
    catalog.insert(
        "Track and Field",
        Activity::new(
            "Train for sprints, distance, and field events",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(["noah@mergington.edu", "mia@mergington.edu"]),
    );
    catalog.insert(
        "Drama Club",
        Activity::new(
            "Acting workshops and stage productions",
            "Mondays, 4:00 PM - 5:30 PM",
            16,
        )
        .with_participants(["zoe@mergington.edu", "isaac@mergington.edu"]),
    );
    catalog.insert(
        "Art Studio",
        Activity::new(
            "Explore drawing, painting, and mixed media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            14,
        )
        .with_participants(["harper@mergington.edu", "ethan@mergington.edu"]),
    );
    catalog.insert(
        "Math Circle",
        Activity::new(
            "Solve challenging problems and explore advanced topics",
            "Wednesdays, 4:00 PM - 5:00 PM",
            15,
        )
        .with_participants(["elijah@mergington.edu", "lily@mergington.edu"]),
    );
    catalog.insert(
        "Science Olympiad",
        Activity::new(
            "Prepare for science competitions with hands-on experiments",
            "Fridays, 2:30 PM - 4:00 PM",
            20,
        )
        .with_participants(["lucas@mergington.edu", "chloe@mergington.edu"]),
    );
    catalog.insert(
        "Chess Club",
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    catalog.insert(
        "Programming Class",
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    catalog.insert(
        "Gym Class",
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    catalog
}
