//! Store profile and settings.

dto! {
    pub struct Profile {
        general_info: GeneralInfo,
        account: AccountInfo,
        settings: StoreSettings,
        company: Company,
        formats_and_units: FormatsAndUnits,
        languages: Languages,
        taxes: Vec<Tax>,
        zones: Vec<Zone>,
        #[serde(rename = "businessRegistrationID")]
        business_registration_id: BusinessRegistrationId,
    }
}

dto! {
    pub struct GeneralInfo {
        store_id: i64,
        store_url: String,
        starter_site: StarterSite,
    }
}

dto! {
    /// The hosted starter site, when the store uses one.
    pub struct StarterSite {
        ecwid_subdomain: String,
        custom_domain: String,
        generated_url: String,
        store_logo_url: String,
    }
}

dto! {
    pub struct AccountInfo {
        account_name: String,
        account_nick_name: String,
        account_email: String,
        /// Features enabled by the store's plan.
        available_features: Vec<String>,
    }
}

dto! {
    pub struct StoreSettings {
        /// True if the storefront is in maintenance mode.
        closed: bool,
        store_name: String,
        invoice_logo_url: String,
        email_logo_url: String,
    }
}

dto! {
    pub struct Company {
        company_name: String,
        email: String,
        street: String,
        city: String,
        country_code: String,
        postal_code: String,
        state_or_province_code: String,
        phone: String,
    }
}

dto! {
    pub struct FormatsAndUnits {
        /// ISO 4217 code.
        currency: String,
        currency_prefix: String,
        currency_suffix: String,
        currency_group_separator: String,
        currency_decimal_separator: String,
        currency_truncate_zero_fractional: bool,
        /// Rate against USD.
        currency_rate: f64,
        weight_unit: String,
        weight_group_separator: String,
        weight_decimal_separator: String,
        weight_truncate_zero_fractional: bool,
        time_format: String,
        date_format: String,
        timezone: String,
    }
}

dto! {
    pub struct Languages {
        enabled_languages: Vec<String>,
        facebook_preferred_locale: String,
    }
}

dto! {
    pub struct Tax {
        id: i64,
        name: String,
        enabled: bool,
        include_in_price: bool,
        use_shipping_address: bool,
        tax_shipping: bool,
        applied_by_default: bool,
        /// Rate in percent used for zones without a rule.
        default_tax: f64,
        rules: Vec<TaxRule>,
    }
}

dto! {
    pub struct TaxRule {
        zone_id: String,
        tax: f64,
    }
}

dto! {
    /// A geographic zone used by tax and shipping rules.
    pub struct Zone {
        id: String,
        name: String,
        country_codes: Vec<String>,
        state_or_province_codes: Vec<String>,
        post_codes: Vec<String>,
    }
}

dto! {
    pub struct BusinessRegistrationId {
        name: String,
        value: String,
    }
}

dto! {
    /// Last modification dates, for incremental synchronization.
    pub struct LatestStats {
        products_updated: String,
        orders_updated: String,
        profile_updated: String,
    }
}
