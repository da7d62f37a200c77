pub mod analysis;

pub use analysis::{
    AnalysisRequest, DetailedResults, HealthStatus, RawAnalysisResponse, RequestId,
    SectionDetail,
};
