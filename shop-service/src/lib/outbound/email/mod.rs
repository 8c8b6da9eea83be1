pub mod smtp;

pub use smtp::SmtpResetMailer;
