use sea_orm::DatabaseConnection;

use crate::server::{
    data::flight_crew::FlightCrewRepository,
    error::AppError,
    guard::{Reference, ReferenceGuard},
    model::assignment::CrewAssignment,
};

pub struct FlightCrewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightCrewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a staff member to a flight.
    ///
    /// # Returns
    /// - `Ok(CrewAssignment)` - The new assignment
    /// - `Err(AppError::BadRequest)` - Unknown staff member, unknown flight, or the staff
    ///   member is already on the flight
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn assign(&self, assignment: CrewAssignment) -> Result<CrewAssignment, AppError> {
        ReferenceGuard::new(self.db)
            .require(&[
                Reference::Staff(&assignment.staff_id),
                Reference::Flight(assignment.flight_num),
            ])
            .await?;

        let repo = FlightCrewRepository::new(self.db);
        if repo
            .exists(&assignment.staff_id, assignment.flight_num)
            .await?
        {
            return Err(already_assigned(&assignment));
        }

        let created = repo
            .create(&assignment.staff_id, assignment.flight_num)
            .await
            .map_err(|e| AppError::from_insert(e, || already_assigned(&assignment)))?;

        tracing::info!(
            "Assigned {} to flight {}",
            created.staff_id,
            created.flight_num
        );

        Ok(created)
    }
}

fn already_assigned(assignment: &CrewAssignment) -> AppError {
    AppError::BadRequest(format!(
        "Crew member {} is already assigned to flight {}",
        assignment.staff_id, assignment.flight_num
    ))
}
