use crate::error::BasketError;

pub type BasketResult<T> = Result<T, BasketError>;
