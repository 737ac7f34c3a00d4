use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::{TimeZone as _, Utc};
use fractic_server_error::{CriticalError, ServerError};
use tokio::fs;

use crate::{
    entities::{
        Company, Customer, FileMover, HtmlToPdf, LogoPicker, PickedImage, Receipt, ReceiptId,
        SaveTarget, ShareTarget, TemplateId, Vehicle, VehicleId, VehiclePricing,
    },
    errors::PdfRelocationFailed,
};

/// "Acme", one vehicle at 20000, service 500, 5% tax, USD.
pub(crate) fn acme_receipt() -> Receipt {
    Receipt {
        id: ReceiptId("0d9a7c52-5e1f-4b7a-9c3d-2f8e6a1b4c70".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap(),
        company: Company {
            name: "Acme".to_string(),
            address: None,
            phone: None,
            email: None,
            logo: None,
        },
        customer: None,
        vehicles: vec![Vehicle {
            id: VehicleId("veh-1".to_string()),
            make: "Toyota".to_string(),
            model: "Land Cruiser".to_string(),
            year: 2022,
            mileage: None,
            vin: "JTMHV05J604123456".to_string(),
            cost: Some(20000.0),
        }],
        pricing: VehiclePricing::Itemized,
        service_charge: 500.0,
        tax_rate: Some(0.05),
        currency: "USD".to_string(),
        notes: None,
        template_id: TemplateId::Minimal,
        pdf_uri: None,
    }
}

pub(crate) fn receipt_with_id(id: &str) -> Receipt {
    Receipt {
        id: ReceiptId(id.to_string()),
        ..acme_receipt()
    }
}

/// Everything optional filled in, two vehicles, one without mileage.
pub(crate) fn detailed_receipt() -> Receipt {
    let mut r = acme_receipt();
    r.company = Company {
        name: "Bay & Sons <Auto Transport>".to_string(),
        address: Some("12 Pier Rd, Oakland".to_string()),
        phone: Some("+1 510 555 0101".to_string()),
        email: Some("dispatch@bayandsons.test".to_string()),
        logo: Some("data:image/png;base64,iVBORw==".to_string()),
    };
    r.customer = Some(Customer {
        name: Some("Dana Lee".to_string()),
        email: Some("dana@example.test".to_string()),
        phone: Some("+1 415 555 0199".to_string()),
        address: None,
    });
    r.vehicles.push(Vehicle {
        id: VehicleId("veh-2".to_string()),
        make: "Mazda".to_string(),
        model: "MX-5".to_string(),
        year: 1994,
        mileage: Some(128500),
        vin: "JM1NA3510R0512345".to_string(),
        cost: Some(1250.5),
    });
    r.notes = Some("Door-to-door.\nKeys with driver.".to_string());
    r
}

/// Older record: one aggregate cost spread over three vehicles, no tax.
pub(crate) fn legacy_receipt() -> Receipt {
    let mut r = acme_receipt();
    r.vehicles = (1..=3)
        .map(|n| Vehicle {
            id: VehicleId(format!("legacy-{n}")),
            make: "Ford".to_string(),
            model: "Transit".to_string(),
            year: 2015 + n,
            mileage: None,
            vin: format!("1FTYR10D0{n}PA00000"),
            cost: None,
        })
        .collect();
    r.pricing = VehiclePricing::LegacyAggregate { car_cost: 1000.0 };
    r.service_charge = 0.0;
    r.tax_rate = None;
    r
}

// Scripted collaborators.
// ---

/// Writes the HTML it is given to `<dir>/print-<n>.pdf`. Fails the first
/// `failures` calls, and sleeps `delay` before each call when set.
pub(crate) struct FakePdfPrinter {
    dir: PathBuf,
    failures: AtomicUsize,
    delay: Option<Duration>,
    pub calls: AtomicUsize,
}

impl FakePdfPrinter {
    pub(crate) fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            failures: AtomicUsize::new(0),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(dir: &Path, failures: usize) -> Self {
        Self {
            failures: AtomicUsize::new(failures),
            ..Self::new(dir)
        }
    }

    pub(crate) fn slow(dir: &Path, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(dir)
        }
    }
}

#[async_trait]
impl HtmlToPdf for FakePdfPrinter {
    async fn print_to_file(&self, html: &str) -> Result<PathBuf, ServerError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(CriticalError::with_debug("printer offline", &"scripted failure"));
        }
        let path = self.dir.join(format!("print-{n}.pdf"));
        fs::write(&path, html)
            .await
            .map_err(|e| CriticalError::with_debug("fake printer write failed", &e))?;
        Ok(path)
    }
}

/// Never manages to move the printed file into place.
pub(crate) struct FailingFileMover;

#[async_trait]
impl FileMover for FailingFileMover {
    async fn move_file(&self, from: &Path, to: &Path) -> Result<(), ServerError> {
        Err(PdfRelocationFailed::with_debug(
            &from.display().to_string(),
            &to.display().to_string(),
            &"disk full",
        ))
    }
}

#[derive(Default)]
pub(crate) struct FakeShareTarget {
    pub unavailable: bool,
    pub shared: Mutex<Vec<(PathBuf, String, String)>>,
}

#[async_trait]
impl ShareTarget for FakeShareTarget {
    async fn is_available(&self) -> bool {
        !self.unavailable
    }

    async fn share(
        &self,
        path: &Path,
        dialog_title: &str,
        mime_type: &str,
    ) -> Result<(), ServerError> {
        self.shared.lock().unwrap().push((
            path.to_path_buf(),
            dialog_title.to_string(),
            mime_type.to_string(),
        ));
        Ok(())
    }
}

/// Accepts saves unless `cancel` is set, in which case the user "dismisses"
/// the dialog.
#[derive(Default)]
pub(crate) struct FakeSaveTarget {
    pub cancel: bool,
    pub saved: Mutex<Vec<(PathBuf, String)>>,
}

#[async_trait]
impl SaveTarget for FakeSaveTarget {
    async fn save(
        &self,
        path: &Path,
        file_name: &str,
        _mime_type: &str,
    ) -> Result<bool, ServerError> {
        if self.cancel {
            return Ok(false);
        }
        self.saved
            .lock()
            .unwrap()
            .push((path.to_path_buf(), file_name.to_string()));
        Ok(true)
    }
}

/// Returns the configured image once per call; `None` simulates a cancel.
#[derive(Default)]
pub(crate) struct FakeLogoPicker {
    pub image: Option<PickedImage>,
}

#[async_trait]
impl LogoPicker for FakeLogoPicker {
    async fn pick(&self) -> Result<Option<PickedImage>, ServerError> {
        Ok(self.image.clone())
    }
}
