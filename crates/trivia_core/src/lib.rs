pub mod domain;
pub mod pagination;
pub mod ports;
pub mod quiz;

pub use domain::{Category, NewQuestion, Question};
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use ports::{PortError, PortResult, QuestionStore};
pub use quiz::{category_filter, pick_question, ALL_CATEGORIES};
