//! Home Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use crate::homes::models::{Home, HomeType, HomeUuid};

    pub(super) fn make_home(uuid: HomeUuid) -> Home {
        Home {
            uuid,
            name: "Rose Cottage".to_string(),
            address: "1 Petal Lane".to_string(),
            hometype: HomeType::Landed,
        }
    }
}
