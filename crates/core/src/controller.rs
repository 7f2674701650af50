//! Contrôleur de la page d'analyse
//!
//! Un déclenchement = validation, une requête, puis rendu ou erreur. Un
//! déclenchement reçu pendant qu'une requête est en vol est refusé avec
//! [`AnalysisError::Busy`] sans toucher à la vue.

use crate::config::RenderConfig;
use crate::error::{AnalysisError, Result};
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::service::AnalysisService;
use crate::view::PageView;
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

pub struct AnalysisPage<S> {
    service: S,
    view: Mutex<PageView>,
    in_flight: AtomicBool,
    render: RenderConfig,
}

/// Remet le drapeau à zéro quelle que soit l'issue
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: AnalysisService> AnalysisPage<S> {
    pub fn new(service: S, render: RenderConfig) -> Self {
        Self {
            service,
            view: Mutex::new(PageView::new()),
            in_flight: AtomicBool::new(false),
            render,
        }
    }

    /// Accès en lecture à la vue; ne pas garder le verrou à travers un `await`
    pub fn view(&self) -> MutexGuard<'_, PageView> {
        self.view.lock()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Analyse la saisie brute et met la vue à jour
    #[instrument(skip(self, raw), fields(request_id = %Uuid::new_v4()))]
    pub async fn analyze(&self, raw: &str) -> Result<AnalysisResult> {
        let _guard = self.begin()?;

        let request = match AnalysisRequest::new(raw) {
            Ok(request) => request,
            Err(e) => {
                self.view.lock().show_error(e.display_message());
                return Err(e);
            }
        };

        debug!(length = request.sequence().len(), "Analyse demandée");

        match self.service.analyze(&request).await {
            Ok(result) => {
                let mut view = self.view.lock();
                view.hide_error();
                view.display_results(&result, &self.render);
                debug!(gc_content = result.gc_content, "Analyse terminée");
                Ok(result)
            }
            Err(e) => {
                warn!("Échec de l'analyse: {}", e);
                self.view.lock().show_error(e.display_message());
                Err(e)
            }
        }
    }

    fn begin(&self) -> Result<InFlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Déclenchement ignoré: une requête est déjà en vol");
            return Err(AnalysisError::Busy);
        }
        Ok(InFlightGuard(&self.in_flight))
    }
}
