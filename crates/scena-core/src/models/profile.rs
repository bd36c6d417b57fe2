use serde::{Deserialize, Serialize};

/// Editable profile fields.
///
/// Edit-form updates arrive as `{field, value}` pairs; `from_name` is the
/// validation gate, so there is no open-ended key assignment into the
/// profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    City,
    Age,
    Phone,
    Email,
    Experience,
    Skills,
    Height,
    Weight,
    Appearance,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        ProfileField::Name,
        ProfileField::City,
        ProfileField::Age,
        ProfileField::Phone,
        ProfileField::Email,
        ProfileField::Experience,
        ProfileField::Skills,
        ProfileField::Height,
        ProfileField::Weight,
        ProfileField::Appearance,
    ];

    /// Resolve a form field name. Unknown names are rejected.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "city" => Some(Self::City),
            "age" => Some(Self::Age),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "experience" => Some(Self::Experience),
            "skills" => Some(Self::Skills),
            "height" => Some(Self::Height),
            "weight" => Some(Self::Weight),
            "appearance" => Some(Self::Appearance),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Appearance => "appearance",
        }
    }

    /// Form label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Имя",
            Self::City => "Город",
            Self::Age => "Возраст",
            Self::Phone => "Телефон",
            Self::Email => "Email",
            Self::Experience => "Опыт работы",
            Self::Skills => "Навыки",
            Self::Height => "Рост",
            Self::Weight => "Вес",
            Self::Appearance => "Внешность",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

/// One portfolio entry: a picked photo or video, by uri.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub kind: MediaKind,
    pub uri: String,
}

/// The actor's profile as edited on the profile screen.
///
/// Session state only; nothing here is written to storage. All editable
/// fields are display strings, as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub name: String,
    pub city: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub experience: String,
    pub skills: String,
    pub height: String,
    pub weight: String,
    pub appearance: String,
    pub avatar: Option<String>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioEntry>,
}

impl ActorProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::City => &self.city,
            ProfileField::Age => &self.age,
            ProfileField::Phone => &self.phone,
            ProfileField::Email => &self.email,
            ProfileField::Experience => &self.experience,
            ProfileField::Skills => &self.skills,
            ProfileField::Height => &self.height,
            ProfileField::Weight => &self.weight,
            ProfileField::Appearance => &self.appearance,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::City => self.city = value,
            ProfileField::Age => self.age = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Email => self.email = value,
            ProfileField::Experience => self.experience = value,
            ProfileField::Skills => self.skills = value,
            ProfileField::Height => self.height = value,
            ProfileField::Weight => self.weight = value,
            ProfileField::Appearance => self.appearance = value,
        }
    }

    pub fn set_avatar(&mut self, uri: String) {
        self.avatar = Some(uri);
    }

    pub fn add_media(&mut self, kind: MediaKind, uri: String) {
        self.portfolio.push(PortfolioEntry { kind, uri });
    }

    /// Remove the portfolio entry at `index`, returning it if present.
    pub fn remove_media(&mut self, index: usize) -> Option<PortfolioEntry> {
        if index < self.portfolio.len() {
            Some(self.portfolio.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_roundtrip() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn unknown_field_names_are_rejected() {
        assert_eq!(ProfileField::from_name("portfolio"), None);
        assert_eq!(ProfileField::from_name("Name"), None);
        assert_eq!(ProfileField::from_name(""), None);
    }

    #[test]
    fn set_field_updates_only_the_named_field() {
        let mut profile = ActorProfile::default();
        profile.set_field(ProfileField::City, "Москва".to_string());

        assert_eq!(profile.field(ProfileField::City), "Москва");
        for field in ProfileField::ALL {
            if field != ProfileField::City {
                assert_eq!(profile.field(field), "");
            }
        }
    }

    #[test]
    fn portfolio_add_and_remove() {
        let mut profile = ActorProfile::default();
        profile.add_media(MediaKind::Photo, "file:///a.jpg".to_string());
        profile.add_media(MediaKind::Video, "file:///b.mp4".to_string());

        let removed = profile.remove_media(0).unwrap();
        assert_eq!(removed.uri, "file:///a.jpg");
        assert_eq!(profile.portfolio.len(), 1);
        assert_eq!(profile.portfolio[0].kind, MediaKind::Video);

        // Out-of-range removal touches nothing
        assert!(profile.remove_media(5).is_none());
        assert_eq!(profile.portfolio.len(), 1);
    }
}
