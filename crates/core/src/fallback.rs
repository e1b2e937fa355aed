//! Built-in content served when the backend cannot be reached.
//!
//! Every dataset is non-empty so a content page never renders without data.

use crate::content::{CrewMember, Destination, ImagePair, Technology, TechnologyImages};

fn image_pair(dir: &str, slug: &str) -> ImagePair {
    ImagePair {
        png: format!("/{dir}/image-{slug}.png"),
        webp: format!("/{dir}/image-{slug}.webp"),
    }
}

fn technology_images(slug: &str) -> TechnologyImages {
    TechnologyImages {
        portrait: format!("/technology/image-{slug}-portrait.jpg"),
        landscape: format!("/technology/image-{slug}-landscape.jpg"),
        portrait_webp: format!("/technology/image-{slug}-portrait.webp"),
        landscape_webp: format!("/technology/image-{slug}-landscape.webp"),
    }
}

fn destination(name: &str, slug: &str, description: &str, distance: &str, travel: &str) -> Destination {
    Destination {
        name: name.to_string(),
        description: description.to_string(),
        distance: distance.to_string(),
        travel: travel.to_string(),
        images: image_pair("destination", slug),
    }
}

fn crew_member(name: &str, slug: &str, role: &str, bio: &str) -> CrewMember {
    CrewMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        images: image_pair("crew", slug),
    }
}

fn technology(name: &str, slug: &str, description: &str) -> Technology {
    Technology {
        name: name.to_string(),
        description: description.to_string(),
        images: technology_images(slug),
    }
}

pub fn destinations() -> Vec<Destination> {
    vec![
        destination(
            "Moon",
            "moon",
            "See our planet as you've never seen it before. A perfect relaxing trip away to help \
             regain perspective and come back refreshed. While you're there, take in some history \
             by visiting the Luna 2 and Apollo 11 landing sites.",
            "384,400 km",
            "3 days",
        ),
        destination(
            "Mars",
            "mars",
            "Don't forget to pack your hiking boots. You'll need them to tackle Olympus Mons, the \
             tallest planetary mountain in our solar system. It's two and a half times the size of \
             Everest!",
            "225 mil. km",
            "9 months",
        ),
        destination(
            "Europa",
            "europa",
            "The smallest of the four Galilean moons orbiting Jupiter, Europa is a winter lover's \
             dream. With an icy surface, it's perfect for a bit of ice skating, curling, hockey, or \
             simple relaxation in your snug wintery cabin.",
            "628 mil. km",
            "3 years",
        ),
        destination(
            "Titan",
            "titan",
            "The only moon known to have a dense atmosphere other than Earth, Titan is a home away \
             from home (just a few hundred degrees colder!). As a bonus, you get striking views of \
             the Rings of Saturn.",
            "1.6 bil. km",
            "7 years",
        ),
    ]
}

pub fn crew() -> Vec<CrewMember> {
    vec![
        crew_member(
            "Douglas Hurley",
            "douglas-hurley",
            "Commander",
            "Douglas Gerald Hurley is an American engineer, former Marine Corps pilot and former \
             NASA astronaut. He launched into space for the third time as commander of Crew Dragon \
             Demo-2.",
        ),
        crew_member(
            "Mark Shuttleworth",
            "mark-shuttleworth",
            "Mission Specialist",
            "Mark Richard Shuttleworth is the founder and CEO of Canonical, the company behind the \
             Linux-based Ubuntu operating system. Shuttleworth became the first South African to \
             travel to space as a space tourist.",
        ),
        crew_member(
            "Victor Glover",
            "victor-glover",
            "Pilot",
            "Pilot on the first operational flight of the SpaceX Crew Dragon to the International \
             Space Station. Glover is a commander in the U.S. Navy where he pilots an F/A-18. He was \
             a crew member of Expedition 64, and served as a station systems flight engineer.",
        ),
        crew_member(
            "Anousheh Ansari",
            "anousheh-ansari",
            "Flight Engineer",
            "Anousheh Ansari is an Iranian American engineer and co-founder of Prodea Systems. \
             Ansari was the fourth self-funded space tourist, the first self-funded woman to fly to \
             the ISS, and the first Iranian in space.",
        ),
    ]
}

pub fn technologies() -> Vec<Technology> {
    vec![
        technology(
            "Launch vehicle",
            "launch-vehicle",
            "A launch vehicle or carrier rocket is a rocket-propelled vehicle used to carry a \
             payload from Earth's surface to space, usually to Earth orbit or beyond. Our WEB-X \
             carrier rocket is the most powerful in operation. Standing 150 metres tall, it's quite \
             an awe-inspiring sight on the launch pad!",
        ),
        technology(
            "Spaceport",
            "spaceport",
            "A spaceport or cosmodrome is a site for launching (or receiving) spacecraft, by \
             analogy to the seaport for ships or airport for aircraft. Based in the famous Cape \
             Canaveral, our spaceport is ideally situated to take advantage of the Earth's rotation \
             for launch.",
        ),
        technology(
            "Space capsule",
            "space-capsule",
            "A space capsule is an often-crewed spacecraft that uses a blunt-body reentry capsule \
             to reenter the Earth's atmosphere without wings. Our capsule is where you'll spend \
             your time during the flight. It includes a space gym, cinema, and plenty of other \
             activities to keep you entertained.",
        ),
    ]
}
