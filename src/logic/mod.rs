pub mod assembler;
pub mod catalog;
pub mod engine;
pub mod normalize;
pub mod reference;
pub mod resolver;
pub mod restriction;
pub mod strategies;

pub use assembler::RecommendationAssembler;
pub use catalog::DistrictCatalog;
pub use engine::AdvisoryEngine;
pub use resolver::{DistrictMatch, DistrictResolver, ResolutionMethod, ResolverRules};
pub use restriction::{
    ClassificationResult, RestrictionClassifier, RestrictionReason, RestrictionRules,
};
pub use strategies::{EmptyDistrictPolicy, RecommendationStrategy, StrategyKind};
