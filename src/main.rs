#![allow(non_snake_case)]

use musette::client;

fn main() {
    dioxus::launch(client::App);
}
