mod permission;
mod provision;
