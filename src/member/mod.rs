//! Member commands

mod add;
mod remove;
mod role;

pub use add::AddMember;
pub use remove::RemoveMember;
pub use role::UpdateMemberRole;
