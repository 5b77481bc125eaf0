use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{pilot::PilotRepository, staff::StaffRepository},
    error::AppError,
    guard::{Reference, ReferenceGuard},
    model::staff::{CreatePilotParams, CreateStaffParams, Pilot, Staff},
};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a staff member and their contact row with a generated staff ID.
    ///
    /// The ID is the lowercased first initial followed by the surname (`"John Smith"` becomes
    /// `"jsmith"`). When that ID is taken, `1`, `2`, ... are appended until a free ID is
    /// found. ID selection and both inserts run in one transaction.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The created staff member including the generated ID
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, AppError> {
        let txn = self.db.begin().await?;
        let repo = StaffRepository::new(&txn);

        let base = staff_id_base(&params.first_name, &params.surname);
        let id = next_free_staff_id(&repo, base).await?;

        let staff = repo.create(id, params).await?;

        txn.commit().await?;

        tracing::info!("Created staff member {}", staff.id);

        Ok(staff)
    }

    /// Records a type rating for an existing staff member, making them a pilot.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The created pilot row
    /// - `Err(AppError::NotFound)` - Staff member does not exist
    /// - `Err(AppError::Conflict)` - Staff member is already a pilot
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_pilot(&self, params: CreatePilotParams) -> Result<Pilot, AppError> {
        ReferenceGuard::new(self.db)
            .not_found()
            .require(&[Reference::Staff(&params.staff_id)])
            .await?;

        let repo = PilotRepository::new(self.db);
        let staff_id = params.staff_id.clone();

        if repo.find_by_staff_id(&staff_id).await?.is_some() {
            return Err(already_pilot(&staff_id));
        }

        let pilot = repo
            .create(params)
            .await
            .map_err(|e| AppError::from_insert(e, || already_pilot(&staff_id)))?;

        tracing::info!(
            "Staff member {} is now a pilot rated {}",
            pilot.staff_id,
            pilot.type_rating
        );

        Ok(pilot)
    }
}

fn already_pilot(staff_id: &str) -> AppError {
    AppError::Conflict(format!("Staff ID {} is already a pilot", staff_id))
}

/// Builds the preferred staff ID from a name: first initial plus surname, lowercased.
pub fn staff_id_base(first_name: &str, surname: &str) -> String {
    let initial: String = first_name.trim().chars().take(1).collect();

    format!("{}{}", initial, surname.trim()).to_lowercase()
}

/// Returns `base` if it is unused, otherwise the first unused `base1`, `base2`, ...
async fn next_free_staff_id<C: ConnectionTrait>(
    repo: &StaffRepository<'_, C>,
    base: String,
) -> Result<String, DbErr> {
    if !repo.exists(&base).await? {
        return Ok(base);
    }

    let mut suffix: u64 = 1;
    loop {
        let candidate = format!("{}{}", base, suffix);
        if !repo.exists(&candidate).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
