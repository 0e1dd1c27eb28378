//! Voter registration and edit forms

use super::{email, optional, required, FormError};
use crate::display::{self, DASH};
use crate::model::{NewVoter, Voter, VoterUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVoterForm {
    pub voter_id: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub address: String,
    pub email: String,
    pub phone_no: String,
    pub branch_name: String,
}

impl NewVoterForm {
    pub fn validate(&self) -> Result<NewVoter, FormError> {
        let voter_id = required(&self.voter_id, "Voter ID")?;
        if !voter_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormError::InvalidVoterId);
        }
        let full_name = required(&self.full_name, "Full name")?;
        let date_of_birth = required(&self.date_of_birth, "Date of birth")?;
        if display::parse_date(&date_of_birth).is_none() {
            return Err(FormError::InvalidDate);
        }
        let email = match optional(&self.email) {
            Some(raw) => Some(email(&raw)?),
            None => None,
        };

        Ok(NewVoter {
            voter_id,
            full_name,
            date_of_birth,
            address: optional(&self.address),
            email,
            phone_no: optional(&self.phone_no),
            branch_name: optional(&self.branch_name),
        })
    }
}

/// Admin edit of an existing voter, pre-filled from the record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterEditor {
    pub voter_id: String,
    pub fields: VoterUpdate,
}

impl VoterEditor {
    /// `None` when the record has no voter id to address the update to
    pub fn from_voter(voter: &Voter) -> Option<Self> {
        let voter_id = voter.voter_id.clone().filter(|id| !id.is_empty())?;
        let address = display::format_address(voter.address.as_ref());
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        Some(Self {
            voter_id,
            fields: VoterUpdate {
                full_name: text(&voter.full_name),
                date_of_birth: text(&voter.date_of_birth),
                address: if address == DASH { String::new() } else { address },
                email: text(&voter.email),
                phone_no: text(&voter.phone_no),
                branch_name: text(&voter.branch_name),
                photo_url: text(&voter.photo_url),
            },
        })
    }

    /// Set a field by its wire name; unknown names are ignored
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "full_name" => &mut self.fields.full_name,
            "date_of_birth" => &mut self.fields.date_of_birth,
            "address" => &mut self.fields.address,
            "email" => &mut self.fields.email,
            "phone_no" => &mut self.fields.phone_no,
            "branch_name" => &mut self.fields.branch_name,
            "photo_url" => &mut self.fields.photo_url,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, StructuredAddress};

    #[test]
    fn test_new_voter_required_fields() {
        let mut form = NewVoterForm {
            voter_id: "1021".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::Required("Full name")));

        form.full_name = "Asha".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Date of birth")));

        form.date_of_birth = "31/12/1990".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidDate));

        form.date_of_birth = "1990-12-31".to_string();
        let voter = form.validate().unwrap();
        assert_eq!(voter.address, None);
    }

    #[test]
    fn test_editor_flattens_address() {
        let voter = Voter {
            voter_id: Some("1021".to_string()),
            full_name: Some("Asha".to_string()),
            address: Some(Address::Structured(StructuredAddress {
                house_name: Some("Rose Villa".to_string()),
                place: Some("Kochi".to_string()),
                ..Default::default()
            })),
            ..Voter::default()
        };
        let editor = VoterEditor::from_voter(&voter).unwrap();
        assert_eq!(editor.fields.address, "Rose Villa, Kochi");
        assert_eq!(editor.fields.email, "");

        let bare = Voter {
            voter_id: Some("1".to_string()),
            ..Voter::default()
        };
        assert_eq!(VoterEditor::from_voter(&bare).unwrap().fields.address, "");
        assert!(VoterEditor::from_voter(&Voter::default()).is_none());
    }

    #[test]
    fn test_editor_set() {
        let mut editor = VoterEditor::default();
        assert!(editor.set("phone_no", "98470"));
        assert!(!editor.set("voter_id", "2"));
        assert_eq!(editor.fields.phone_no, "98470");
    }
}
