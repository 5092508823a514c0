pub mod support;

mod contact_flow;
