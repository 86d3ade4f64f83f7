pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod draft;
            pub mod errors;
            pub mod field;
            pub mod normalize;
            pub mod registration;
            pub mod rules;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod decide;
                pub mod decision;
                pub mod form_controller;
                pub mod handler;
                pub mod sink_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod rendered_output;
            }
        }
    }
}

pub mod shell;
