pub mod command;
pub mod completer;
pub mod external;
pub mod registry;
pub mod tokenizer;
