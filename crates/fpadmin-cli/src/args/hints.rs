use fpadmin_types::EntityKind;

pub mod cmd {
    pub const CONFIG_INIT: &str = "fpadmin config init";
    pub const CONFIG_SHOW: &str = "fpadmin config show";
}

/// Subcommand name an entity is reached under
pub fn entity(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::PaymentUrl => "payment-url",
        EntityKind::LegalDocument => "legal",
        other => other.as_str(),
    }
}

pub mod fmt {
    use super::entity;
    use fpadmin_types::EntityKind;

    pub fn list(kind: EntityKind) -> String {
        format!("fpadmin {} list", entity(kind))
    }

    pub fn list_page(kind: EntityKind, page: usize) -> String {
        format!("fpadmin {} list --page {}", entity(kind), page)
    }

    pub fn show(kind: EntityKind, id: &str) -> String {
        format!("fpadmin {} show {}", entity(kind), id)
    }

    pub fn edit(kind: EntityKind, id: &str) -> String {
        format!("fpadmin {} edit {} --data '<JSON>'", entity(kind), id)
    }

    pub fn create(kind: EntityKind) -> String {
        format!("fpadmin {} create --data '<JSON>'", entity(kind))
    }
}
