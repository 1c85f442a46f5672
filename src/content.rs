use crate::i18n::Localized;

pub const OWNER: &str = "Eugen Birich";
pub const OWNER_EMAIL: &str = "contact@birich.it";
pub const GITHUB_URL: &str = "https://github.com/b-rich-dev";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/eugen-birich";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tech {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: usize,
    pub title: &'static str,
    pub question: Localized,
    pub description: Localized,
    pub stack: &'static [Tech],
    pub github: &'static str,
    pub live: &'static str,
    pub screenshot: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: Localized,
    pub author: Localized,
}

const JAVASCRIPT: Tech = Tech {
    name: "JavaScript",
    icon: "/icons/javascript_icon.svg",
};
const HTML: Tech = Tech {
    name: "HTML",
    icon: "/icons/html_icon.svg",
};
const CSS: Tech = Tech {
    name: "CSS",
    icon: "/icons/css_icon.svg",
};
const FIREBASE: Tech = Tech {
    name: "Firebase",
    icon: "/icons/firebase_icon.svg",
};
const REST_API: Tech = Tech {
    name: "REST API",
    icon: "/icons/rest_api_icon.png",
};

const QUESTION: Localized = Localized::new(
    "What is this project about?",
    "Worum geht es in diesem Projekt?",
);

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Join",
        question: QUESTION,
        description: Localized::new(
            "Task manager inspired by the Kanban System. Create and organize tasks using drag and drop functions, assign users and categories.",
            "Aufgabenmanager, inspiriert vom Kanban-System. Aufgaben per Drag & Drop erstellen und organisieren, Benutzer und Kategorien zuweisen.",
        ),
        stack: &[JAVASCRIPT, FIREBASE, CSS, HTML],
        github: "https://github.com/b-rich-dev/Join-Team-Work",
        live: "https://birich.it/Join-Team-Work",
        screenshot: "/img/join.png",
    },
    Project {
        id: 2,
        title: "El Pollo Loco",
        question: QUESTION,
        description: Localized::new(
            "Jump, run and throw game based on object-oriented approach. Help Pepe to find coins and tabasco salsa to fight against the crazy hen.",
            "Springen, rennen und werfen – ein objektorientiertes Spiel. Hilf Pepe, Münzen und Tabasco-Salsa zu finden, um die verrückten Hennen zu besiegen.",
        ),
        stack: &[JAVASCRIPT, CSS, HTML],
        github: "https://github.com/b-rich-dev/el_pollo_loco",
        live: "https://birich.it/el_pollo_loco",
        screenshot: "/img/el_pollo_loco.png",
    },
    Project {
        id: 3,
        title: "Pokedex",
        question: QUESTION,
        description: Localized::new(
            "This Pokédex app is a responsive web application that provides Pokémon fans with a comprehensive database of all Pokémon. The app uses the official PokéAPI to present up-to-date and complete information.",
            "Diese Pokedex-App ist eine responsive Webanwendung, die Pokémon-Fans eine umfassende Datenbank aller Pokémon bietet. Die App nutzt die offizielle PokéAPI, um aktuelle und vollständige Informationen zu präsentieren.",
        ),
        stack: &[REST_API, JAVASCRIPT, CSS, HTML],
        github: "https://github.com/b-rich-dev/pokedex",
        live: "https://birich.it/pokedex",
        screenshot: "/img/pokedex.png",
    },
];

/// Looks up a project by id, falling back to the first one.
pub fn project(id: usize) -> &'static Project {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&PROJECTS[0])
}

/// The id after `id`, wrapping from the last project to the first.
pub fn next_project_id(id: usize) -> usize {
    if id >= PROJECTS.len() {
        1
    } else {
        id + 1
    }
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: Localized::new(
            "Working with Eugen was a great experience. His reliable, conscientious, and team-oriented approach helped us achieve excellent results together. I especially value his openness, expertise, and solution-focused mindset – I can fully recommend collaborating with him.",
            "Die Zusammenarbeit mit Eugen war äußerst angenehm und erfolgreich. Durch seine zuverlässige, gewissenhafte und teamorientierte Arbeitsweise konnten wir gemeinsam starke Ergebnisse erzielen. Besonders schätze ich seine Offenheit, Fachkompetenz und lösungsorientierte Haltung – eine Zusammenarbeit, die ich uneingeschränkt empfehlen kann.",
        ),
        author: Localized::new(
            "Mathias Johann Josef Voigt - Team Partner",
            "Mathias Johann Josef Voigt - Teamkollege",
        ),
    },
    Testimonial {
        text: Localized::new(
            "He works in a very structured and efficient manner, enabling tasks to be completed quickly and accurately. Particularly impressive is his ability to quickly and confidently familiarize himself with existing code. He has solid knowledge of HTML, CSS, JavaScript, TypeScript, and Angular, as well as experience with Git, GitHub, Firebase, and Figma. Working with him is always pleasant, professional, and constructive.",
            "Er arbeitet sehr strukturiert und effizient, wodurch Aufgaben schnell und fehlerfrei umgesetzt werden. Besonders beeindruckend ist seine Fähigkeit, sich rasch und sicher in bestehenden Code einzuarbeiten. Er verfügt über fundierte Kenntnisse in HTML, CSS, JavaScript, TypeScript und Angular sowie Erfahrung mit Git, GitHub, Firebase und Figma. Die Zusammenarbeit mit ihm ist stets angenehm, professionell und konstruktiv.",
        ),
        author: Localized::new("Dominik Rapp - Team Partner", "Dominik Rapp - Teamkollege"),
    },
    Testimonial {
        text: Localized::new(
            "Eugen stands out through his structured and goal-oriented approach. He quickly understands complex contexts and delivers high-quality results with great attention to detail. His strong technical expertise in modern web technologies and his proactive, collaborative mindset make him a valuable team member. Working with him is always efficient, insightful, and enjoyable.",
            "Eugen überzeugt durch seine strukturierte und zielorientierte Arbeitsweise. Er erfasst komplexe Zusammenhänge schnell und liefert hochwertige Ergebnisse mit viel Sorgfalt und Detailgenauigkeit. Durch seine fundierte Fachkenntnis in modernen Webtechnologien und seine proaktive, teamorientierte Art ist er eine große Bereicherung für jedes Projekt. Die Zusammenarbeit mit ihm ist stets effizient, inspirierend und angenehm.",
        ),
        author: Localized::new("Sven Degen - Team Partner", "Sven Degen - Teamkollege"),
    },
];

pub static SKILLS: [Tech; 10] = [
    HTML,
    CSS,
    JAVASCRIPT,
    Tech {
        name: "TypeScript",
        icon: "/icons/typescript_icon.svg",
    },
    Tech {
        name: "Angular",
        icon: "/icons/angular_icon.svg",
    },
    FIREBASE,
    Tech {
        name: "Git",
        icon: "/icons/git_icon.svg",
    },
    REST_API,
    Tech {
        name: "Scrum",
        icon: "/icons/scrum_icon.svg",
    },
    Tech {
        name: "Material Design",
        icon: "/icons/material_design_icon.svg",
    },
];
