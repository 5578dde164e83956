//! English (US) translations.

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "opsvault",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        save: "Save",
        cancel: "Cancel",
        confirm: "Confirm",
        quit: "Quit",
        loading: "Loading...",
        yes: "Yes",
        no: "No",
        id: "ID",
        created_at: "Created",
        updated_at: "Updated",
    },
    nav: NavTexts {
        title: "Menu",
        accounts: "Accounts",
        hosts: "Hosts",
        secrets: "Secrets",
        sites: "Sites",
        logout: "Log out",
    },
    login: LoginTexts {
        title: "Sign in",
        username: "Username",
        password: "Password",
        submit: "Sign in",
        hint: "Tab switch field · Enter submit",
    },
    records: RecordsTexts {
        empty_title: "No data",
        empty_hint: "Press Alt+a to create the first record",
        search: "Search",
        selected: "selected",
        page_of: "of",
        total: "total",
        csv_unavailable: "CSV transfer is not available for this page",
    },
    modal: ModalTexts {
        create_title: "Create",
        edit_title: "Edit",
        delete_title: "Confirm delete",
        delete_one: "Delete this record?",
        delete_many: "Delete {} selected records?",
        required_mark: "*",
        field_required: "This field is required",
        generate_hint: "Alt+g generate",
        logo_disabled: "(fill the dependent field first)",
    },
    help: HelpTexts {
        title: "Help",
        lines: &[
            "Tab          switch panel",
            "Up/Down      move selection",
            "Left/Right   previous / next page",
            "Space        toggle row selection",
            "Alt+Space    toggle select all",
            "Alt+a        create record",
            "Alt+e / Enter edit record",
            "Alt+d        delete row",
            "Alt+Shift+D  delete selected",
            "/            search",
            "Alt+v        reveal secret cell",
            "Alt+c        copy cell",
            "Alt+i / Alt+x  import / export CSV",
            "Alt+l        switch language",
            "Alt+q        quit",
        ],
    },
    accounts: AccountsTexts {
        title: "Accounts",
        platform: "Platform",
        platform_url: "Platform URL",
        logo: "Logo",
        username: "Username",
        password: "Password",
        security_email: "Security Email",
        security_phone: "Security Phone",
        remark: "Remark",
    },
    hosts: HostsTexts {
        title: "Hosts",
        provider: "Provider",
        provider_url: "Provider URL",
        address: "Address",
        ports: "Ports",
        username: "Username",
        password: "Password",
        hostname: "Hostname",
        os: "OS",
        logo: "Logo",
        cpu_capacity: "CPU",
        ram_capacity: "RAM",
        disk_capacity: "Disk",
        specs: "Specs",
        cpu_placeholder: "cores",
        ram_placeholder: "amount",
        disk_placeholder: "amount",
    },
    secrets: SecretsTexts {
        title: "Secrets",
        platform: "Platform",
        platform_url: "Platform URL",
        logo: "Logo",
        key_id: "Key ID",
        key_secret: "Key Secret",
        remark: "Remark",
    },
    sites: SitesTexts {
        title: "Sites",
        name: "Name",
        url: "URL",
        logo: "Logo",
    },
};
