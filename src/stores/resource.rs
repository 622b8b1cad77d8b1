// ============================================================================
// RESOURCE SLOT - un recurso cacheado del backend
// ============================================================================
// Cada slot vive su propio ciclo: unloaded -> loaded -> stale-on-error.
// Un fetch fallido NUNCA pisa los datos anteriores; solo deja constancia
// del fallo (tipo + timestamp) para que la UI pueda marcar el dato como
// posiblemente obsoleto.
//
// Los fetches concurrentes del mismo recurso se ordenan con un número de
// secuencia por emisión: al resolver, un resultado solo se aplica si su
// secuencia supera a la última aplicada. Así gana siempre el fetch emitido
// más tarde, aunque la red devuelva las respuestas desordenadas.
// ============================================================================

use crate::services::ApiError;

/// Estado observable de un slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Nunca se ha cargado con éxito
    Unloaded,
    /// El último fetch aplicado terminó bien
    Loaded,
    /// El último fetch aplicado falló; se conservan los datos anteriores
    StaleOnError,
}

/// Constancia del último fetch fallido de un slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotFailure {
    pub error: ApiError,
    /// Epoch seconds del fallo
    pub at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlot<T> {
    data: Option<T>,
    last_failure: Option<SlotFailure>,
    issued_seq: u64,
    applied_seq: u64,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            last_failure: None,
            issued_seq: 0,
            applied_seq: 0,
        }
    }
}

impl<T> ResourceSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn last_failure(&self) -> Option<&SlotFailure> {
        self.last_failure.as_ref()
    }

    pub fn status(&self) -> SlotStatus {
        match (&self.data, &self.last_failure) {
            (Some(_), None) => SlotStatus::Loaded,
            (Some(_), Some(_)) => SlotStatus::StaleOnError,
            (None, _) => SlotStatus::Unloaded,
        }
    }

    /// Emite un fetch nuevo y devuelve su número de secuencia. El caller
    /// debe pasárselo a apply() cuando la petición resuelva.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Aplica el resultado de un fetch. Devuelve true si el slot cambió.
    ///
    /// Un resultado con secuencia igual o menor a la última aplicada es de
    /// un fetch viejo que llegó tarde: se descarta entero, incluido su
    /// error. En éxito los datos se reemplazan al completo (sin merges).
    pub fn apply(&mut self, seq: u64, result: Result<T, ApiError>, now: i64) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;

        match result {
            Ok(value) => {
                self.data = Some(value);
                self.last_failure = None;
            }
            Err(error) => {
                self.last_failure = Some(SlotFailure { error, at: now });
            }
        }
        true
    }

    /// Registra un fallo sin pasar por la red (p.ej. fetch sin token).
    /// Consume una secuencia igualmente para no reordenarse con fetches
    /// reales en vuelo.
    pub fn record_failure(&mut self, error: ApiError, now: i64) -> bool {
        let seq = self.begin_fetch();
        self.apply(seq, Err(error), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> ResourceSlot<Vec<u32>> {
        ResourceSlot::new()
    }

    #[test]
    fn test_transicion_unloaded_a_loaded() {
        let mut s = slot();
        assert_eq!(s.status(), SlotStatus::Unloaded);
        assert!(s.data().is_none());

        let seq = s.begin_fetch();
        assert!(s.apply(seq, Ok(vec![1, 2, 3]), 100));
        assert_eq!(s.status(), SlotStatus::Loaded);
        assert_eq!(s.data(), Some(&vec![1, 2, 3]));
        assert!(s.last_failure().is_none());
    }

    #[test]
    fn test_primer_fetch_fallido_sigue_unloaded() {
        let mut s = slot();
        let seq = s.begin_fetch();
        assert!(s.apply(seq, Err(ApiError::Network("timeout".to_string())), 100));

        // Sin datos previos, el slot sigue sin cargar, pero con el fallo
        // registrado
        assert_eq!(s.status(), SlotStatus::Unloaded);
        assert!(s.data().is_none());
        let failure = s.last_failure().unwrap();
        assert_eq!(failure.error, ApiError::Network("timeout".to_string()));
        assert_eq!(failure.at, 100);
    }

    #[test]
    fn test_refetch_fallido_conserva_datos() {
        let mut s = slot();
        let seq = s.begin_fetch();
        s.apply(seq, Ok(vec![7]), 100);

        let seq = s.begin_fetch();
        assert!(s.apply(seq, Err(ApiError::Network("sin red".to_string())), 200));

        // stale-on-error: los datos viejos siguen visibles
        assert_eq!(s.status(), SlotStatus::StaleOnError);
        assert_eq!(s.data(), Some(&vec![7]));
        assert_eq!(s.last_failure().unwrap().at, 200);
    }

    #[test]
    fn test_refetch_exitoso_reemplaza_entero_y_limpia_error() {
        let mut s = slot();
        let seq = s.begin_fetch();
        s.apply(seq, Ok(vec![1]), 100);
        let seq = s.begin_fetch();
        s.apply(seq, Err(ApiError::Network("x".to_string())), 150);

        let seq = s.begin_fetch();
        assert!(s.apply(seq, Ok(vec![9, 9]), 200));
        assert_eq!(s.status(), SlotStatus::Loaded);
        assert_eq!(s.data(), Some(&vec![9, 9]));
        assert!(s.last_failure().is_none());
    }

    #[test]
    fn test_gana_el_fetch_emitido_mas_tarde() {
        // Dos fetches en vuelo: el primero (lento) resuelve DESPUÉS que el
        // segundo. El orden de emisión manda: el resultado viejo se tira.
        let mut s = slot();
        let seq_lento = s.begin_fetch();
        let seq_rapido = s.begin_fetch();

        assert!(s.apply(seq_rapido, Ok(vec![2]), 200));
        assert!(!s.apply(seq_lento, Ok(vec![1]), 300));

        assert_eq!(s.data(), Some(&vec![2]));
        assert_eq!(s.status(), SlotStatus::Loaded);
    }

    #[test]
    fn test_error_tardio_de_fetch_viejo_se_descarta() {
        let mut s = slot();
        let seq_lento = s.begin_fetch();
        let seq_rapido = s.begin_fetch();

        s.apply(seq_rapido, Ok(vec![5]), 200);
        // El fallo del fetch viejo no debe manchar el slot ya actualizado
        assert!(!s.apply(seq_lento, Err(ApiError::Network("x".to_string())), 300));
        assert_eq!(s.status(), SlotStatus::Loaded);
        assert!(s.last_failure().is_none());
    }

    #[test]
    fn test_record_failure_sin_red() {
        let mut s = slot();
        assert!(s.record_failure(ApiError::AuthMissing, 50));
        assert_eq!(s.last_failure().unwrap().error, ApiError::AuthMissing);
        assert_eq!(s.status(), SlotStatus::Unloaded);
    }
}
