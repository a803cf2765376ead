use feature_domain::{Environment, Feature, ResultCode, Suite};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{FeatureTester, HookableFeatureTester};
use crate::errors::FeatureTesterError;
use crate::result::HookedTestResult;

/// Resultado de una feature dentro de una suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub title: String,
    pub result: HookedTestResult,
}

/// Resultados de todas las features de una suite, en el orden de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite_name: String,
    pub features: Vec<FeatureReport>,
}

impl SuiteReport {
    pub fn result_code(&self) -> ResultCode { ResultCode::max_of(self.features.iter().map(|f| f.result.result_code())) }

    pub fn is_passed(&self) -> bool { self.result_code() < ResultCode::Failed }

    /// Número de features cuyo resultado es exactamente `code`.
    pub fn count(&self, code: ResultCode) -> usize {
        self.features.iter().filter(|f| f.result.result_code() == code).count()
    }
}

/// Ejecuta las features de una suite a través de un `HookableFeatureTester`.
pub struct SuiteTester<T: FeatureTester> {
    feature_tester: HookableFeatureTester<T>,
}

impl<T: FeatureTester> SuiteTester<T> {
    pub fn new(feature_tester: HookableFeatureTester<T>) -> Self { Self { feature_tester } }

    pub fn feature_tester(&self) -> &HookableFeatureTester<T> { &self.feature_tester }

    /// Ejecución secuencial; el primer fallo de listener aborta la suite.
    pub fn run(&self,
               suite: &Suite,
               environment: &Environment,
               features: &[Feature],
               skip: bool)
               -> Result<SuiteReport, FeatureTesterError> {
        let mut reports = Vec::with_capacity(features.len());
        for feature in features {
            let result = self.feature_tester.run(suite, environment, feature, skip)?;
            reports.push(FeatureReport { title: feature.title().to_string(),
                                         result });
        }
        let report = SuiteReport { suite_name: suite.name().to_string(),
                                   features: reports };
        info!("suite `{}`: {} feature(s), result {}", suite.name(), report.features.len(), report.result_code());
        Ok(report)
    }

    /// Ejecución concurrente con rayon. El reporte conserva el orden de
    /// `features`; el orden de las notificaciones entre features no está
    /// definido.
    pub fn run_parallel(&self,
                        suite: &Suite,
                        environment: &Environment,
                        features: &[Feature],
                        skip: bool)
                        -> Result<SuiteReport, FeatureTesterError> {
        let reports = features.par_iter()
                              .map(|feature| {
                                  self.feature_tester
                                      .run(suite, environment, feature, skip)
                                      .map(|result| FeatureReport { title: feature.title().to_string(),
                                                                    result })
                              })
                              .collect::<Result<Vec<_>, _>>()?;
        let report = SuiteReport { suite_name: suite.name().to_string(),
                                   features: reports };
        info!("suite `{}`: {} feature(s) in parallel, result {}", suite.name(), report.features.len(), report.result_code());
        Ok(report)
    }
}
