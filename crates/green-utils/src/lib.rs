// green-marketplace-client/green-utils
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
