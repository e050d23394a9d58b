use tracing::warn;

use super::link::{Link, LinkTarget};
use super::models::{
    CourseEntry, Education, Footer, Grade, Photo, Portfolio, ProjectEntry, SkillEntry, SkillLevel,
};

fn link(label: &str, href: &str) -> Link {
    Link::new(label, href).unwrap_or_else(|e| {
        warn!("Builtin link '{}' is invalid ({}), rendering as placeholder", label, e);
        Link {
            label: label.to_string(),
            href: href.to_string(),
            target: LinkTarget::Placeholder,
        }
    })
}

fn skill(name: &str, level: SkillLevel, description: &str) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        description: description.to_string(),
        level,
    }
}

fn course(title: &str, grade: &str, description: &str) -> CourseEntry {
    CourseEntry {
        title: title.to_string(),
        description: description.to_string(),
        grade: Grade::parse(grade),
    }
}

fn project(
    title: &str,
    description: &str,
    image_path: &str,
    tech_tags: &[&str],
    demo_href: &str,
    repo_href: &str,
) -> ProjectEntry {
    ProjectEntry {
        title: title.to_string(),
        description: description.to_string(),
        image_path: image_path.to_string(),
        tech_tags: tech_tags.iter().map(|t| t.to_string()).collect(),
        demo: link("View Project", demo_href),
        repo: link("GitHub", repo_href),
    }
}

impl Portfolio {
    /// The page content shipped with the binary
    pub fn builtin() -> Self {
        use SkillLevel::{Advanced, Intermediate};

        Portfolio {
            brand: "Portfolio".to_string(),
            owner: "Dominik Kasza".to_string(),
            greeting: "Hi, I'm".to_string(),
            tagline: "A passionate developer crafting beautiful and functional web experiences"
                .to_string(),
            about: vec![
                "I'm a passionate developer with a keen eye for design and a love for creating \
                 seamless user experiences. With several years of experience in web development, \
                 I specialize in building modern, responsive, and accessible websites."
                    .to_string(),
                "My journey in tech has been driven by a constant desire to learn and improve, \
                 always staying up-to-date with the latest technologies and best practices."
                    .to_string(),
            ],
            nav_links: vec![
                link("About", "#about"),
                link("Skills", "#skills"),
                link("Projects", "#projects"),
                link("Contact", "#contact"),
            ],
            hero_links: vec![
                link("Get in Touch", "#contact"),
                link("View Projects", "#projects"),
            ],
            skills: vec![
                skill("React", Advanced, "Proficient in building modern, responsive web applications using React.js. Experienced with hooks, context, and state management."),
                skill("Next.js", Advanced, "Skilled in server-side rendering, static site generation, and API routes. Built multiple production applications using Next.js."),
                skill("TypeScript", Intermediate, "Strong understanding of type systems and TypeScript best practices. Implemented type-safe applications and libraries."),
                skill("Tailwind CSS", Advanced, "Expert in utility-first CSS and responsive design. Created custom components and maintained consistent design systems."),
                skill("Node.js", Intermediate, "Experience in building scalable backend services and APIs. Knowledge of Express.js and RESTful architecture."),
                skill("Python", Intermediate, "Proficient in Python programming, data analysis, and automation. Experience with popular frameworks and libraries."),
                skill("SQL", Advanced, "Strong database design and query optimization skills. Experience with PostgreSQL, MySQL, and database management."),
                skill("Git", Advanced, "Expert in version control, branching strategies, and collaborative development workflows. Regular contributor to open-source projects."),
                skill("Java", Advanced, "Proficient in Java programming with experience in object-oriented design, Spring framework, and enterprise applications."),
                skill("JavaScript", Advanced, "Strong foundation in JavaScript fundamentals, ES6+ features, and modern web development practices."),
                skill("C++", Intermediate, "Experience with C++ programming, memory management, and system-level development."),
                skill("C#", Intermediate, "Skilled in C# development, .NET framework, and Windows application development."),
            ],
            projects: vec![
                project(
                    "AI Task Management App",
                    "A collaborative task management application with AI authentication, notifications, and a live feed.",
                    "/projects/lockdin.jpg",
                    &["Next.js", "OpenAI", "Tailwind CSS", "Supabase", "Discord Bot"],
                    "https://lockdin-nine.vercel.app/",
                    "https://github.com/Guciosk/Lockdin",
                ),
                project(
                    "Heart Disease Prediction App",
                    "A Machine Learning model that predicts the likelihood of heart disease based on a user's input.",
                    "/projects/Hearts.png",
                    &["Java", "JavaFX", "Java Swing"],
                    "https://github.com/Guciosk/Hearts/tree/main/Hearts",
                    "https://github.com/Guciosk/Hearts/tree/main/Hearts",
                ),
                project(
                    "Portfolio Website",
                    "A responsive portfolio website showcasing projects and skills with an emphasis on organization and ease of use.",
                    "/projects/portfolio-website.jpg",
                    &["Next.js", "Framer Motion", "Tailwind CSS", "Cursor", "Vercel"],
                    "#",
                    "https://github.com/Guciosk/Personal-Portfolio",
                ),
            ],
            education: Education {
                school: "CUNY - Queens College".to_string(),
                degree: "Computer Science BS".to_string(),
                expected_graduation: "December 2025".to_string(),
                photos: vec![
                    Photo {
                        path: "/education/queens-college-campus-manhattan-skyline.jpg".to_string(),
                        alt: "University Campus".to_string(),
                    },
                    Photo {
                        path: "/education/queens-college-image.jpg".to_string(),
                        alt: "University Campus View".to_string(),
                    },
                ],
                courses: vec![
                    course("Data Structures", "C", "Fundamentals data structures and their implementations: stacks, queues, trees (binary and AVL), heaps, graphs, hash tables."),
                    course("Principles of Programming Languages", "IP", "Principles and implementation of programming languages."),
                    course("Theory of Computation", "B+", "Finite state machines, regular languages, regular expressions, grammars, context-free languages, pushdown automata, Turing machines, recursive sets, recursively enumerable sets, reductions, Halting problem, diagonalization."),
                    course("Design and Analysis of Algorithms", "B", "Advanced data structures: B-trees, graphs, hash-tables. Problem-solving strategies including divide-and-conquer, backtracking, dynamic programming, and greedy algorithms."),
                    course("Database Systems", "IP", "ER modeling; functional dependencies and relational design; file organization and indexing; relational algebra and calculi as query languages; SQL"),
                    course("Operating Systems Principles", "IP", "Principles of the design and implementation of operating systems."),
                    course("Computer Architecture", "C+", "Instruction set architectures, including RISC, CISC, stack, and VLIW architectures."),
                    course("Web & Internet Technologies", "IP", "Internet protocol stack, analysis of representation protocols; Internet applications: client-server architecture, popular Internet application protocols, Internet application design, client side programming, server side programming, Web application and website design"),
                    course("Software Engineering", "A", "Principles of software engineering including the software life cycle, reliability, maintenance, requirements and specifications, design, implementation and testing"),
                ],
            },
            footer: Footer {
                copyright: "© 2024 Dominik Kasza. All rights reserved.".to_string(),
                links: vec![
                    link("GitHub", "https://github.com/Guciosk"),
                    link("LinkedIn", "https://www.linkedin.com/in/dominik-kasza-399775260/"),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let portfolio = Portfolio::builtin();
        assert_eq!(portfolio.skills.len(), 12);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.education.courses.len(), 9);
        assert!(portfolio.validate().is_ok());
    }

    #[test]
    fn test_builtin_in_progress_courses() {
        let portfolio = Portfolio::builtin();
        let in_progress = portfolio
            .education
            .courses
            .iter()
            .filter(|c| c.grade.is_in_progress())
            .count();
        assert_eq!(in_progress, 4);
    }

    #[test]
    fn test_builtin_links_classified() {
        let portfolio = Portfolio::builtin();
        let anchors: Vec<_> = portfolio
            .nav_links
            .iter()
            .filter_map(|l| l.target.anchor())
            .collect();
        assert_eq!(anchors, vec!["about", "skills", "projects", "contact"]);

        assert!(portfolio.footer.links.iter().all(|l| l.is_external()));

        let placeholders: Vec<_> = portfolio
            .projects
            .iter()
            .flat_map(|p| [&p.demo, &p.repo])
            .filter(|l| l.target == LinkTarget::Placeholder)
            .collect();
        assert_eq!(placeholders.len(), 1);
    }
}
