//! Fixed text the terminal prints.

/// Simulated files for `ls` / `cat`, in listing order.
pub const FILES: &[(&str, &str)] = &[
    (
        "about.txt",
        "CS student graduating in 2026. Passionate about building pain-relieving projects with MERN stack.",
    ),
    (
        "skills.txt",
        "JavaScript, React, Node.js, MongoDB, Express.js, HTML, CSS, Git, Linux",
    ),
    (
        "dreams.txt",
        "Building baseerah - a dream logging application",
    ),
    (
        "goals.txt",
        "Create projects that make people's lives easier and more efficient",
    ),
];

pub fn file(name: &str) -> Option<&'static str> {
    FILES
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, content)| *content)
}

pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "Why do Java developers wear glasses? Because they don't see sharp! 👓",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
    "Why did the programmer quit his job? He didn't get arrays! 📊",
];

pub const WELCOME_COMMAND: &str = "Terminal initialized";
pub const WELCOME: &[&str] = &[
    "Welcome to Asnan's interactive terminal! 🖥️",
    "Type 'whatnow' to see available commands",
];

/// `(usage, description)` rows of the `whatnow` box.
pub const COMMAND_REFERENCE: &[(&str, &str)] = &[
    ("whatnow", "Show available commands"),
    ("about", "About me"),
    ("skills", "My technical skills"),
    ("projects", "Current projects"),
    ("contact", "Contact information"),
    ("social", "Social media links"),
    ("resume", "Download resume info"),
    ("clear/cls", "Clear terminal screen"),
    ("date", "Show current date"),
    ("whoami", "Display current user"),
    ("ls", "List files"),
    ("cat [file]", "Display file content"),
    ("echo [text]", "Display text"),
    ("pwd", "Print working directory"),
    ("theme", "Toggle dark/light mode"),
    ("jokes", "Tell a programming joke"),
    ("history", "Show command history"),
    ("views", "Show unique visitor analytics"),
    ("reset-views", "Reset visitor counter (dev only)"),
    ("version", "Show terminal version"),
    ("exit", "Exit terminal session"),
];

/// A titled block: info header followed by output lines.
pub struct Block {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const ABOUT: Block = Block {
    title: "About Asnan:",
    lines: &[
        "👋 Hi! I'm Asnan, a Computer Science student graduating in 2026.",
        "🎯 Goal: Building pain-relieving projects using MERN stack.",
        "💭 Currently working on Baseerah - a dream logging app.",
        "🌱 Always learning and exploring new technologies!",
    ],
};

pub const SKILLS: Block = Block {
    title: "Technical Skills:",
    lines: &[
        "Frontend: JavaScript, React, HTML5, CSS3",
        "Backend: Node.js, Express.js, MongoDB",
        "Tools: Git, Linux, VS Code",
        "Learning: MERN Stack, Web Development",
    ],
};

pub const PROJECTS: Block = Block {
    title: "Current Projects:",
    lines: &[
        "🌟 Baseerah - Dream logging application",
        "📖 This Blogfolio - Personal website with terminal interface",
        "🎓 MERN Stack Learning Projects",
    ],
};

pub const CONTACT: Block = Block {
    title: "Contact Information:",
    lines: &[
        "📧 Email: asnan0130@gmail.com",
        "🐦 Twitter: @l0n3d3v",
        "💼 LinkedIn: linkedin.com/in/l0n3d3v",
    ],
};

pub const SOCIAL: Block = Block {
    title: "Social Media:",
    lines: &[
        "🐦 Twitter/X: https://x.com/l0n3d3v (@l0n3d3v)",
        "💼 LinkedIn: https://www.linkedin.com/in/l0n3d3v (asnan)",
    ],
};

pub const RESUME: Block = Block {
    title: "Resume:",
    lines: &[
        "📄 Resume will be available soon!",
        "For now, you can contact me directly for more details.",
    ],
};

pub const VERSION: Block = Block {
    title: "🚀 Terminal Version Information:",
    lines: &[
        "Asnan's Blogfolio Terminal v1.0",
        "Built with: Rust",
        "Last Updated: July 2025",
        "Status: Fully Operational ✅",
    ],
};
