use std::future::Future;

use futures_util::future::{abortable, AbortHandle, Abortable, LocalBoxFuture};

use crate::models::UpdateOutcome;
use crate::services::CartError;

/// Request + recarga pendientes de un click.
///
/// Se ejecuta desacoplado del listener (`spawn_local`). Se puede cancelar con
/// `CancelHandle`, aunque hoy nadie lo hace: navegar fuera de la página
/// simplemente abandona la tarea.
pub struct UpdateTask {
    future: Abortable<LocalBoxFuture<'static, Result<(), CartError>>>,
    handle: AbortHandle,
}

/// Handle para cancelar una `UpdateTask` antes de que llegue la respuesta
#[derive(Clone, Debug)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

impl UpdateTask {
    pub(crate) fn new<F>(work: F) -> Self
    where
        F: Future<Output = Result<(), CartError>> + 'static,
    {
        let boxed: LocalBoxFuture<'static, Result<(), CartError>> = Box::pin(work);
        let (future, handle) = abortable(boxed);
        Self { future, handle }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.handle.clone())
    }

    pub async fn run(self) -> Result<UpdateOutcome, CartError> {
        match self.future.await {
            Ok(Ok(())) => Ok(UpdateOutcome::Reloaded),
            Ok(Err(e)) => Err(e),
            Err(_aborted) => Ok(UpdateOutcome::Cancelled),
        }
    }

    /// Ejecuta la tarea sin que nadie espere el resultado.
    /// Un fallo no se reintenta ni se muestra al usuario, solo queda en consola.
    pub async fn run_detached(self) {
        match self.run().await {
            Ok(UpdateOutcome::Reloaded) => log::debug!("🔄 Carrito actualizado, recargando página"),
            Ok(UpdateOutcome::Cancelled) => log::debug!("⏹️ Actualización de carrito cancelada"),
            Err(e) => log::warn!("⚠️ Actualización de carrito sin recarga: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_finished_work_reports_reloaded() {
        let task = UpdateTask::new(async { Ok(()) });
        assert_eq!(block_on(task.run()), Ok(UpdateOutcome::Reloaded));
    }

    #[test]
    fn test_failed_work_is_returned() {
        let task = UpdateTask::new(async { Err(CartError::Parse("eof".to_string())) });
        assert_eq!(block_on(task.run()), Err(CartError::Parse("eof".to_string())));
    }

    #[test]
    fn test_cancel_before_run_skips_work() {
        let ran = Rc::new(Cell::new(false));
        let ran_in_task = ran.clone();
        let task = UpdateTask::new(async move {
            ran_in_task.set(true);
            Ok(())
        });

        let handle = task.cancel_handle();
        handle.cancel();
        assert!(handle.is_cancelled());

        assert_eq!(block_on(task.run()), Ok(UpdateOutcome::Cancelled));
        assert!(!ran.get());
    }

    #[test]
    fn test_run_detached_swallows_errors() {
        let task = UpdateTask::new(async { Err(CartError::Network("offline".to_string())) });
        block_on(task.run_detached());
    }
}
