use folio_core::content::Link;
use folio_core::page::SectionId;
use folio_core::Portfolio;

/// Something on the page that can take keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    NavLink(usize),
    HeroLink(usize),
    Skill(usize),
    ProjectDemo(usize),
    ProjectRepo(usize),
    Course(usize),
    FooterLink(usize),
}

/// What activating a focus target does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    Follow(&'a Link),
    ToggleSkill(&'a str),
    ToggleCourse(&'a str),
}

impl FocusTarget {
    /// Section the target is drawn in
    pub fn section(&self) -> SectionId {
        match self {
            FocusTarget::NavLink(_) => SectionId::Nav,
            FocusTarget::HeroLink(_) => SectionId::Hero,
            FocusTarget::Skill(_) => SectionId::Skills,
            FocusTarget::ProjectDemo(_) | FocusTarget::ProjectRepo(_) => SectionId::Projects,
            FocusTarget::Course(_) => SectionId::Education,
            FocusTarget::FooterLink(_) => SectionId::Footer,
        }
    }

    pub fn resolve<'a>(&self, portfolio: &'a Portfolio) -> Option<Activation<'a>> {
        let activation = match *self {
            FocusTarget::NavLink(i) => Activation::Follow(portfolio.nav_links.get(i)?),
            FocusTarget::HeroLink(i) => Activation::Follow(portfolio.hero_links.get(i)?),
            FocusTarget::Skill(i) => Activation::ToggleSkill(&portfolio.skills.get(i)?.name),
            FocusTarget::ProjectDemo(i) => Activation::Follow(&portfolio.projects.get(i)?.demo),
            FocusTarget::ProjectRepo(i) => Activation::Follow(&portfolio.projects.get(i)?.repo),
            FocusTarget::Course(i) => {
                Activation::ToggleCourse(&portfolio.education.courses.get(i)?.title)
            }
            FocusTarget::FooterLink(i) => Activation::Follow(portfolio.footer.links.get(i)?),
        };
        Some(activation)
    }

    /// Short human-readable label for the status bar
    pub fn label(&self, portfolio: &Portfolio) -> String {
        match self.resolve(portfolio) {
            Some(Activation::Follow(link)) => match self {
                FocusTarget::ProjectDemo(i) | FocusTarget::ProjectRepo(i) => portfolio
                    .projects
                    .get(*i)
                    .map(|p| format!("{}: {}", p.title, link.label))
                    .unwrap_or_else(|| link.label.clone()),
                _ => link.label.clone(),
            },
            Some(Activation::ToggleSkill(name)) => format!("Skill: {}", name),
            Some(Activation::ToggleCourse(title)) => format!("Course: {}", title),
            None => String::new(),
        }
    }
}

/// Every focus target in document order
pub fn focus_order(portfolio: &Portfolio) -> Vec<FocusTarget> {
    let mut order = Vec::new();
    order.extend((0..portfolio.nav_links.len()).map(FocusTarget::NavLink));
    order.extend((0..portfolio.hero_links.len()).map(FocusTarget::HeroLink));
    order.extend((0..portfolio.skills.len()).map(FocusTarget::Skill));
    for i in 0..portfolio.projects.len() {
        order.push(FocusTarget::ProjectDemo(i));
        order.push(FocusTarget::ProjectRepo(i));
    }
    order.extend((0..portfolio.education.courses.len()).map(FocusTarget::Course));
    order.extend((0..portfolio.footer.links.len()).map(FocusTarget::FooterLink));
    order
}
