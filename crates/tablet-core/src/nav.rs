#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    World,
    System,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Personal, Self::World, Self::System];

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Management",
            Self::World => "World Interaction",
            Self::System => "System & Knowledge",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Personal => "Me, as a player",
            Self::World => "Me and the others",
            Self::System => "Me and the game",
        }
    }

    pub fn apps(self) -> &'static [AppId] {
        match self {
            Self::Personal => &[AppId::Profile, AppId::Bank, AppId::Garage, AppId::Properties],
            Self::World => &[AppId::CitizenServices, AppId::Marketplace, AppId::Messaging],
            Self::System => &[AppId::AcademyGuide, AppId::Settings],
        }
    }

    pub fn first_app(self) -> AppId {
        self.apps()[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppId {
    #[default]
    Profile,
    Bank,
    Garage,
    Properties,
    CitizenServices,
    Marketplace,
    Messaging,
    AcademyGuide,
    Settings,
}

impl AppId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "My Profile",
            Self::Bank => "AnoBank",
            Self::Garage => "My Garage",
            Self::Properties => "Property Registry",
            Self::CitizenServices => "Citizen Services",
            Self::Marketplace => "Ano Market",
            Self::Messaging => "Contacts & Messaging",
            Self::AcademyGuide => "Academy Guide",
            Self::Settings => "Settings",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Profile | Self::Bank | Self::Garage | Self::Properties => Category::Personal,
            Self::CitizenServices | Self::Marketplace | Self::Messaging => Category::World,
            Self::AcademyGuide | Self::Settings => Category::System,
        }
    }
}

/// Which category and app the tablet shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellNav {
    category: Category,
    app: AppId,
}

impl ShellNav {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn app(&self) -> AppId {
        self.app
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.app = category.first_app();
    }

    pub fn select_app(&mut self, app: AppId) {
        self.category = app.category();
        self.app = app;
    }

    pub fn breadcrumb(&self) -> (&'static str, &'static str) {
        (self.category.label(), self.app.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_profile() {
        let nav = ShellNav::default();
        assert_eq!(nav.category(), Category::Personal);
        assert_eq!(nav.app(), AppId::Profile);
        assert_eq!(nav.breadcrumb(), ("Personal Management", "My Profile"));
    }

    #[test]
    fn switching_category_selects_its_first_app() {
        let mut nav = ShellNav::default();
        nav.select_app(AppId::Garage);
        nav.select_category(Category::World);
        assert_eq!(nav.app(), AppId::CitizenServices);
        nav.select_category(Category::System);
        assert_eq!(nav.app(), AppId::AcademyGuide);
    }

    #[test]
    fn selecting_app_follows_its_category() {
        let mut nav = ShellNav::default();
        nav.select_app(AppId::Settings);
        assert_eq!(nav.category(), Category::System);
    }

    #[test]
    fn every_app_belongs_to_exactly_one_category() {
        let mut seen = 0;
        for category in Category::ALL {
            for app in category.apps() {
                assert_eq!(app.category(), category);
                seen += 1;
            }
        }
        assert_eq!(seen, 9);
    }
}
