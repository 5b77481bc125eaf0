/// Home and work contact details stored alongside staff members and passengers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub home_address: String,
    pub work_address: String,
    pub home_phone: String,
    pub work_phone: String,
}
