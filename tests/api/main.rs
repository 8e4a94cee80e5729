//! Integration tests for the SlideSpeak API client, driven against a
//! local stand-in for the service.

mod account;
