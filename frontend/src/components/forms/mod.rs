pub mod columns;
pub mod conversion;
