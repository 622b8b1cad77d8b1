use serde::{Deserialize, Serialize};

/// Resumen de ingresos calculado íntegramente por el backend. El store
/// guarda el último snapshot tal cual llega; el redondeo es cosa de la
/// capa de presentación (ver utils::format).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RevenueSummary {
    #[serde(default)]
    pub day: f64,
    #[serde(default)]
    pub month: f64,
    #[serde(default)]
    pub year: f64,
    #[serde(rename = "monthlyBreakdown", default)]
    pub monthly_breakdown: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub total: f64,
}

impl RevenueSummary {
    /// Peso de un mes sobre el total mensual, para las barras del desglose
    pub fn month_share(&self, total: f64) -> f64 {
        if self.month > 0.0 {
            (total / self.month) * 100.0
        } else {
            0.0
        }
    }
}
