mod common;
mod urgency;
