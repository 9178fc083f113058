pub mod emoji_rating;
pub mod rating_summary;
pub mod review_filters;
pub mod review_form;
pub mod reviews_list;
