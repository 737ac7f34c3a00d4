// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod key_value_datasource;
        pub(crate) mod local_file_mover;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_time_model;
        pub(crate) mod receipt_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod receipts_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod history_entry;
        pub(crate) mod platform;
        pub(crate) mod receipt;
        pub(crate) mod receipt_draft;
        pub(crate) mod template;
        pub(crate) mod totals;
        pub(crate) mod vehicle;
    }
    pub(crate) mod logic {
        pub(crate) mod logo;
        pub(crate) mod receipt_naming;
        pub(crate) mod totals;
        pub(crate) mod validation;
    }
    pub(crate) mod repositories {
        pub(crate) mod receipts_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod export_usecase;
        pub(crate) mod receipt_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod templates;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::history_entry::*;
        pub use crate::domain::entities::platform::*;
        pub use crate::domain::entities::receipt::*;
        pub use crate::domain::entities::receipt_draft::*;
        pub use crate::domain::entities::template::*;
        pub use crate::domain::entities::totals::*;
        pub use crate::domain::entities::vehicle::*;
    }

    pub mod logic {
        pub use crate::domain::logic::logo::logo_data_uri;
        pub use crate::domain::logic::receipt_naming::*;
        pub use crate::domain::logic::totals::*;
        pub use crate::domain::logic::validation::validate_draft;
    }

    pub mod storage {
        pub use crate::data::datasources::key_value_datasource::*;
        pub use crate::data::datasources::local_file_mover::*;
        pub use crate::data::repositories::receipts_repository_impl::ReceiptsRepositoryImpl;
        pub use crate::domain::repositories::receipts_repository::*;
    }

    pub mod render {
        pub use crate::presentation::templates::{render, render_receipt, render_tag};
        pub use crate::presentation::utils::{format_currency, format_date, format_tax_rate};
    }
}
