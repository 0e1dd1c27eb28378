//! Candidate application form

use super::{optional, FormError};
use crate::api::{Attachment, Part};
use crate::model::POSITIONS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidacyForm {
    pub position: String,
    pub symbol: String,
    pub statement: String,
    pub experience: String,
    pub declaration: bool,
    pub identity_proof: Option<Attachment>,
    pub membership_proof: Option<Attachment>,
    pub supporting_document: Option<Attachment>,
    pub candidate_photo: Option<Attachment>,
}

impl CandidacyForm {
    /// Check the form in the order the user sees the messages
    pub fn validate(&self) -> Result<(), FormError> {
        let position = self.position.trim();
        if position.is_empty() || self.statement.trim().is_empty() {
            return Err(FormError::PositionAndStatementRequired);
        }
        if self.identity_proof.is_none() || self.membership_proof.is_none() {
            return Err(FormError::ProofsRequired);
        }
        if !self.declaration {
            return Err(FormError::DeclarationRequired);
        }
        if !POSITIONS.contains(&position) {
            return Err(FormError::UnknownPosition(position.to_string()));
        }
        Ok(())
    }

    /// Validate and turn the form into multipart fields
    pub fn into_parts(self) -> Result<Vec<Part>, FormError> {
        self.validate()?;

        let mut parts = vec![
            Part::text("position", self.position.trim()),
            Part::text("statement", self.statement.trim()),
            Part::text("declaration", "true"),
        ];
        if let Some(experience) = optional(&self.experience) {
            parts.push(Part::text("experience", experience));
        }
        if let Some(symbol) = optional(&self.symbol) {
            parts.push(Part::text("symbol", symbol));
        }

        let files = [
            ("identity_proof", self.identity_proof),
            ("membership_proof", self.membership_proof),
            ("supporting_document", self.supporting_document),
            ("candidate_photo", self.candidate_photo),
        ];
        parts.extend(
            files
                .into_iter()
                .filter_map(|(name, file)| file.map(|f| Part::file(name, f))),
        );
        Ok(parts)
    }
}
