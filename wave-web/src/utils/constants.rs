//! Page copy

pub const PAGE_HEADER: &str = "👋 Hey there!";

pub const PAGE_BIO: &str =
    "Connect your Ethereum wallet and wave at me! Leave a message and it will be stored on-chain forever.";

pub const MESSAGE_PLACEHOLDER: &str = "Enter your message here";

pub const CONNECT_LABEL: &str = "Connect Wallet";
