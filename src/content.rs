//! Static portfolio content. Purely presentational data; nothing in here
//! carries behavior.

pub struct Profile {
    pub name_first: &'static str,
    pub name_last: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub location: &'static str,
    pub education_summary: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub email: &'static str,
    pub whatsapp_number: &'static str,
    pub whatsapp_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name_first: "Md. Siam",
    name_last: "Hossain",
    tagline: "Full Stack Web Developer",
    intro: "I build robust web applications using Laravel, React, and PHP. \
            Passionate about creating efficient, scalable, and user-friendly solutions.",
    location: "Uttara Sector 10, Dhaka, Bangladesh",
    education_summary: "BSc (CSE) - IUBAT (CGPA 3.40/4.00)",
    github_url: "https://github.com/siamStark",
    linkedin_url: "https://www.linkedin.com/in/siamhossain24/",
    email: "siammiah9@gmail.com",
    whatsapp_number: "+880 1688-813663",
    whatsapp_url: "https://wa.me/8801688813663",
};

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Hi, I'm Md. Siam Hossain, a Computer Science & Engineering graduate and a \
     passionate PHP, Laravel & React developer. I enjoy building scalable and \
     practical web applications such as e-commerce platforms, management systems, \
     ERP systems and custom web solutions.",
    "I have hands-on experience from my internship where I worked on real-world \
     projects, integrated payment gateways, and followed the MVC architecture. \
     I'm always eager to learn new technologies and build software that solves \
     real-world problems.",
];

pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        icon: "</>",
        title: "Frontend",
        skills: &[
            "React.js",
            "JavaScript (ES6+)",
            "HTML5 & CSS3",
            "Tailwind CSS",
            "Bootstrap",
        ],
    },
    SkillGroup {
        icon: "⛁",
        title: "Backend",
        skills: &["PHP", "Laravel", "C# (Basic)", "Node.js (Basic)"],
    },
    SkillGroup {
        icon: "⛃",
        title: "Database",
        skills: &[
            "MySQL",
            "MongoDB",
            "Database Design",
            "Query Optimization",
        ],
    },
    SkillGroup {
        icon: ">_",
        title: "Tools & System",
        skills: &[
            "Git & GitHub",
            "Windows Server",
            "CentOS",
            "Active Directory",
        ],
    },
];

pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub current: bool,
}

pub const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        role: "Intern - Laravel Developer",
        company: "Softdeft, Tongi, Gazipur",
        period: "June 2025 - December 2025",
        highlights: &[
            "Assisted in developing and maintaining modules for a multi-vendor e-commerce platform.",
            "Integrated SSLCommerz payment gateway for secure online transactions.",
            "Collaborated with the team on vendor dashboard features and debugging Laravel controllers.",
            "Gained hands-on experience with MVC architecture and RESTful API integration.",
        ],
        current: true,
    },
    ExperienceEntry {
        role: "Training - PHP (Laravel)",
        company: "ICT Division's EDGE Project",
        period: "Nov 2024 - Jul 2025",
        highlights: &[
            "Completed 80 hours of intensive training on PHP and Laravel framework.",
            "Hands-on training on Computer Networking, including Windows Server and Active Directory.",
            "Microsoft certified workshop in Virtual Machine.",
        ],
        current: false,
    },
];

pub struct Project {
    pub title: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Pharmacy Management System",
        tech: &["Dotnet", "C#", "MySQL", "JavaScript"],
        description: "A comprehensive system for managing pharmacy inventory, sales, \
                      and customer data built with .NET ecosystem.",
        link: "https://github.com/siamStark/Pharmacy-Management-System-using-Dotnet",
    },
    Project {
        title: "Movie Website",
        tech: &["Core PHP", "HTML", "CSS", "MySQL"],
        description: "A dynamic movie listing website allowing users to browse and \
                      search for movies, built using raw PHP and MySQL.",
        link: "https://github.com/siamStark/Movie-Website",
    },
    Project {
        title: "School Management System",
        tech: &["Laravel", "PHP", "Blade", "MySQL"],
        description: "An academic management platform for tracking student data, \
                      attendance, and grades efficiently.",
        link: "https://github.com/siamStark/School-Management-System",
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub result: &'static str,
    pub note: Option<&'static str>,
}

pub const EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        degree: "BSc in CSE",
        institution: "IUBAT (International University of Business Agriculture and Technology)",
        period: "2021-2025",
        result: "CGPA: 3.40 / 4.00",
        note: Some(
            "Thesis: \"Enhancing Deepfake Detection Accuracy with SwinIR and RandomForest\" (Under Review)",
        ),
    },
    EducationEntry {
        degree: "HSC (Science)",
        institution: "Major General Mahmudul Hasan Adarsha College",
        period: "2019",
        result: "GPA: 4.25 / 5.00",
        note: None,
    },
    EducationEntry {
        degree: "SSC (Science)",
        institution: "Velayet Hossain Bahumukhi Uchcha Bidyalay",
        period: "2017",
        result: "GPA: 5.00 / 5.00",
        note: None,
    },
];
